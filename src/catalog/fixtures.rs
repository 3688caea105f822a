use super::{Catalog, DateOption, FacilityStatus, SlotStatus, Station};

/// 東京 (ok), 新宿 (no locker), 渋谷 (partial), 池袋 (ok), 上野 (no shower);
/// day 14 is default-active with slots 10:00, 11:00 (closed), 12:00.
pub(crate) fn sample_catalog() -> Catalog {
    use FacilityStatus::*;

    Catalog::new(
        vec![
            Station::new("東京", Available, Available),
            Station::new("新宿", Unavailable, Available),
            Station::new("渋谷", Partial, Available),
            Station::new("池袋", Available, Partial),
            Station::new("上野", Available, Unavailable),
        ],
        vec![
            DateOption::new(14, "月")
                .default_active()
                .slot("10:00", SlotStatus::Available)
                .slot("11:00", SlotStatus::Unavailable)
                .slot("12:00", SlotStatus::Available),
            DateOption::new(15, "火")
                .slot("10:00", SlotStatus::Available)
                .slot("14:00", SlotStatus::Available),
        ],
    )
    .expect("sample catalog is valid")
}
