//! Photo sets for named spots.
//!
//! A fixed, code-defined table mapping spot names to their image paths.
//! Lookup is by spot name (not marker id) and case-sensitive; a miss yields
//! an empty slice so callers can show a "no images" notice instead of an
//! error.

/// Spot name → ordered image paths.
const SPOT_IMAGES: &[(&str, &[&str])] = &[
    ("Flag", &["./img1.jpg", "./img2.jpg", "./img3.jpg"]),
    (
        "Principal room",
        &[
            "./img4.jpg",
            "./img5.jpg",
            "./img6.jpg",
            "./img7.jpg",
            "./img8.jpg",
            "./img9.jpg",
            "./img10.jpg",
        ],
    ),
    ("Civil", &["./img11.jpg", "./img12.jpg", "./img13.jpg"]),
    ("Indoor", &["./img16.jpg"]),
    ("Stadium", &["./img14.jpg", "./img15.jpg"]),
    (
        "CSE",
        &[
            "./img17.jpg",
            "./img18.jpg",
            "./img19.jpg",
            "./img20.jpg",
            "./img21.jpg",
            "./img22.jpg",
        ],
    ),
    ("Library", &["./img23.jpg", "./img24.jpg", "./img25.jpg"]),
    ("Girls hostel", &["./img28.jpg"]),
    ("Boys hostel", &["./img29.jpg", "./img30.jpg"]),
    ("Auditorium", &["./img31.jpg", "./img32.jpg"]),
];

/// Images for a spot, in display order. Unknown names yield an empty slice.
pub fn images_for(name: &str) -> &'static [&'static str] {
    SPOT_IMAGES
        .iter()
        .find(|(spot, _)| *spot == name)
        .map(|(_, images)| *images)
        .unwrap_or(&[])
}
