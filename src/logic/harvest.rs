use chrono::{Days, NaiveDate};

use crate::models::{garden::Cell, report::UpcomingHarvest};

/// Inclusive `[today, today + days_ahead]`. The end saturates at the last
/// representable date.
pub fn harvest_window(today: NaiveDate, days_ahead: u32) -> (NaiveDate, NaiveDate) {
    let end = today
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX);
    (today, end)
}

/// Planted cells whose projected harvest falls inside the window, earliest
/// first. Cells ready on the same day are ordered by container id, then
/// coordinate.
pub fn upcoming_harvests<'a>(
    cells: impl IntoIterator<Item = &'a Cell>,
    today: NaiveDate,
    days_ahead: u32,
) -> Vec<UpcomingHarvest> {
    let (start, end) = harvest_window(today, days_ahead);

    let mut upcoming: Vec<UpcomingHarvest> = cells
        .into_iter()
        .filter_map(|cell| {
            let planting = cell.planting()?;
            let ready_on = cell.projected_harvest_date().ok()?;
            if ready_on < start || ready_on > end {
                return None;
            }
            Some(UpcomingHarvest {
                cell_id: cell.id().to_string(),
                container_id: cell.container_id().to_string(),
                coordinate: cell.coordinate(),
                plant_id: planting.plant_id.clone(),
                plant_name: planting.plant_name.clone(),
                planted_on: planting.planted_on,
                ready_on,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.ready_on
            .cmp(&b.ready_on)
            .then_with(|| a.container_id.cmp(&b.container_id))
            .then_with(|| a.coordinate.cmp(&b.coordinate))
    });
    upcoming
}
