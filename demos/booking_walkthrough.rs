//! Booking Walkthrough
//!
//! Drives the wizard through every screen the way a presentation layer
//! would: events in, snapshots out.
//!
//! Key concepts:
//! - Loading the catalog through a data provider
//! - Observer registration for snapshots
//! - Guarded advances that silently stay put
//! - Cancelling the confirmation modal and confirming the booking
//!
//! Run with: RUST_LOG=debug cargo run --example booking_walkthrough

use station_booking::catalog::{
    DateId, DateOption, FacilityStatus, SlotId, SlotStatus, StaticCatalogProvider, Station,
};
use station_booking::{BookingConfig, FlowController, FlowSnapshot};

fn provider() -> StaticCatalogProvider {
    use FacilityStatus::*;

    StaticCatalogProvider::new(
        vec![
            Station::new("東京", Available, Available),
            Station::new("新宿", Unavailable, Available),
            Station::new("渋谷", Partial, Available),
            Station::new("池袋", Available, Partial),
        ],
        vec![
            DateOption::new(14, "月")
                .default_active()
                .slot("10:00", SlotStatus::Available)
                .slot("11:00", SlotStatus::Unavailable)
                .slot("12:00", SlotStatus::Available),
            DateOption::new(15, "火").slot("09:00", SlotStatus::Available),
        ],
    )
}

fn render(snapshot: &FlowSnapshot) {
    println!("[{:?}]", snapshot.current_screen);
    println!(
        "  guide: {} | error: {}",
        snapshot.selection.guidance_text, snapshot.selection.error_text
    );
    if let Some(summary) = &snapshot.summary {
        println!(
            "  {} {} → {} (locker {} / shower {})",
            summary.datetime, summary.origin, summary.destination, summary.locker, summary.shower
        );
    }
    if let Some(notice) = &snapshot.notice {
        println!("  {notice}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Booking Walkthrough ===\n");

    let mut flow = FlowController::load(&provider(), BookingConfig::default())?;
    flow.subscribe(render);

    let tokyo = flow.catalog().station_by_name("東京").ok_or("missing 東京")?;
    let shinjuku = flow.catalog().station_by_name("新宿").ok_or("missing 新宿")?;
    let shibuya = flow.catalog().station_by_name("渋谷").ok_or("missing 渋谷")?;

    println!("Step 1: pick a pair where the destination has no locker");
    flow.on_station_clicked(tokyo);
    flow.on_station_clicked(shinjuku);
    flow.on_advance_requested();

    println!("\nStep 2: swap the destination and advance");
    flow.on_station_clicked(shinjuku);
    flow.on_station_clicked(shibuya);
    flow.on_advance_requested();

    println!("\nStep 3: pick a slot (the 11:00 slot is closed)");
    flow.on_slot_clicked(SlotId::new(DateId(0), 1));
    flow.on_slot_clicked(SlotId::new(DateId(0), 2));
    flow.on_advance_requested();

    println!("\nStep 4: cancel, then confirm");
    flow.on_cancel_requested();
    flow.on_advance_requested();
    flow.on_confirm_requested();

    println!("\nScreens visited:");
    for screen in flow.history().get_path() {
        println!("  {screen}");
    }

    Ok(())
}
