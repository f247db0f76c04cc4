/// Kindergartens a tabarruat can be filed under, in display order.
pub const PASTI_OPTIONS: [&str; 28] = [
    "PASTI Al Amin",
    "PASTI Al Fateh",
    "PASTI Al Furqan 1",
    "PASTI Al Furqan 2",
    "PASTI Al Ikhlas",
    "PASTI Al Khawarizmi",
    "PASTI Al Quds",
    "PASTI An Najah",
    "PASTI Ar Rahmah",
    "PASTI Ar Raudhah 1",
    "PASTI Ar Raudhah 2",
    "PASTI As Syakirin",
    "PASTI Az Zahrah 1",
    "PASTI Az Zahrah 2",
    "PASTI Az Zahrah 3",
    "PASTI Az Zahrah 4",
    "PASTI Baitul Ikhwah 1",
    "PASTI Baitul Ikhwah 2",
    "PASTI Cahaya Al Hamimi",
    "PASTI Darul Ulum 3",
    "PASTI Ibnu Sina",
    "PASTI Khaleef",
    "PASTI Lt. Imtiyaz",
    "PASTI Lt. Mukmin",
    "PASTI Lt. Muttaqin",
    "PASTI Nurul Iman",
    "PASTI Smart One",
    "PASTI Little Ikhwah",
];

pub fn list_options() -> &'static [&'static str] {
    &PASTI_OPTIONS
}
