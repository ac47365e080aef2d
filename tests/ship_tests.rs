use sea_battle::{Coord, Orientation, Ship};

#[test]
fn test_cells_follow_orientation() {
    let horizontal = Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal);
    let cells: Vec<_> = horizontal.cells().collect();
    assert_eq!(cells, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);

    let vertical = Ship::new(Coord::new(2, 4), 2, Orientation::Vertical);
    let cells: Vec<_> = vertical.cells().collect();
    assert_eq!(cells, vec![Coord::new(2, 4), Coord::new(3, 4)]);
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert_eq!(ship.lives(), 2);
    assert!(!ship.is_sunk());

    // miss
    assert!(!ship.register_hit(Coord::new(0, 0)));
    assert_eq!(ship.lives(), 2);

    assert!(ship.register_hit(Coord::new(1, 1)));
    assert_eq!(ship.lives(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coord::new(1, 2)));
    assert!(ship.is_sunk());
}

#[test]
fn test_lives_never_go_negative() {
    let mut ship = Ship::new(Coord::new(0, 0), 1, Orientation::Vertical);
    assert!(ship.register_hit(Coord::new(0, 0)));
    assert!(ship.register_hit(Coord::new(0, 0)));
    assert_eq!(ship.lives(), 0);
}

#[test]
fn test_neighbourhood_covers_ring() {
    let ship = Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal);
    let mut around: Vec<_> = ship.neighbourhood().collect();
    around.sort();
    around.dedup();
    assert_eq!(around.len(), 9);
    assert!(around.contains(&Coord::new(1, 1)));
    assert!(around.contains(&Coord::new(3, 3)));
    assert!(around.contains(&Coord::new(2, 2)));
}

#[test]
fn test_coord_display_is_one_indexed() {
    assert_eq!(Coord::new(0, 4).to_string(), "1 5");
    assert_eq!(Coord::new(-1, 2).to_index(6), None);
    assert_eq!(Coord::new(5, 5).to_index(6), Some((5, 5)));
    assert_eq!(Coord::new(6, 0).to_index(6), None);
}
