use crate::geometry::Point;
use crate::graph::PlaceRecord;


/// Reference campus layout, keys A-J
pub const CAMPUS_PLACES: [PlaceRecord<'static>; 10] = [
    PlaceRecord::new("A", "Engineering Faculty", Point::new(0.0, 0.0)),
    PlaceRecord::new("B", "Economics Faculty", Point::new(2.0, 3.0)),
    PlaceRecord::new("C", "Library", Point::new(4.0, 1.0)),
    PlaceRecord::new("D", "Rectorate Building", Point::new(6.0, 0.0)),
    PlaceRecord::new("E", "Computer Science Faculty", Point::new(8.0, 3.0)),
    PlaceRecord::new("F", "Campus Mosque", Point::new(10.0, 0.0)),
    PlaceRecord::new("G", "Student Center", Point::new(5.0, 5.0)),
    PlaceRecord::new("H", "Sports Hall", Point::new(7.0, 6.0)),
    PlaceRecord::new("I", "Auditorium", Point::new(9.0, 5.0)),
    PlaceRecord::new("J", "Cafeteria", Point::new(3.0, 7.0)),
];
