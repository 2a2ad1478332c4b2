//! Performance / RPM aggregation
//!
//! Builds the groomer-performance dashboard from the raw appointment
//! list: revenue per minute (RPM) bucketed by month, size category,
//! breed and breed×size. Recomputed in full on every call — there is no
//! incremental state.
//!
//! # Data-quality policy
//!
//! Appointments are dropped from every aggregate when their duration is
//! unparseable or not positive, or when their date does not parse. The
//! drop is silent by design: a bad record degrades the dashboard, it
//! never fails the request. Buckets that end up with zero minutes are
//! absent, not zero-valued, and never appear in rankings.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use shared::models::{Appointment, Client, WeightCategory};

use crate::utils::money::{format_usd, to_decimal, to_f64};
use crate::utils::time;

/// Number of calendar months in the monthly chart window
const MONTH_WINDOW: usize = 5;
/// Breed leaderboard length
const TOP_BREEDS: usize = 7;
/// Top/bottom combo ranking length
const TOP_COMBOS: usize = 3;
/// Matrix row count (breeds ranked by appointment count)
const MATRIX_BREEDS: usize = 6;

/// Headline KPIs
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceKpis {
    /// Average appointment duration in minutes
    pub avg_minutes_per_appointment: f64,
    /// Overall revenue per minute, rounded to cents
    pub revenue_per_minute: f64,
    /// Number of qualifying (completed or paid) appointments
    pub completed_count: u32,
}

/// One bar in a monthly chart series
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPoint {
    /// Short month label ("Mar")
    pub month: String,
    pub value: f64,
}

/// One bar in the size chart series
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePoint {
    pub size: WeightCategory,
    pub value: f64,
}

/// Breed leaderboard entry, value pre-formatted for display
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedEarning {
    pub breed: String,
    /// RPM formatted as `"$X.XX"`
    pub rpm_display: String,
}

/// Breed×size combination with its RPM
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboRpm {
    pub breed: String,
    pub size: WeightCategory,
    pub rpm: f64,
    pub total_minutes: i64,
    pub appointment_count: u32,
}

/// One matrix row: a breed with one RPM cell per size column
/// (`None` = no data, distinct from a real $0.00)
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub breed: String,
    /// Cells in [`WeightCategory::ALL`] order
    pub cells: Vec<Option<f64>>,
}

/// Full performance dashboard payload
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub kpis: PerformanceKpis,
    /// RPM per month, last 5 months oldest first
    pub rpm_by_month: Vec<MonthPoint>,
    /// Average duration per month, same window
    pub duration_by_month: Vec<MonthPoint>,
    /// RPM per size category (categories without data are absent)
    pub rpm_by_size: Vec<SizePoint>,
    /// Top breeds by RPM, capped at 7
    pub earnings_by_breed: Vec<BreedEarning>,
    /// Best 3 breed×size combos, descending RPM
    pub top_combos: Vec<ComboRpm>,
    /// Worst 3 breed×size combos, worst first
    pub bottom_combos: Vec<ComboRpm>,
    /// Breed×size RPM matrix, top 6 breeds by appointment count
    pub matrix: Vec<MatrixRow>,
}

impl PerformanceData {
    /// True when no qualifying appointment survived filtering
    pub fn is_empty(&self) -> bool {
        self.kpis.completed_count == 0
    }
}

#[derive(Debug, Default, Clone)]
struct Bucket {
    minutes: i64,
    revenue: Decimal,
    count: u32,
}

impl Bucket {
    fn add(&mut self, minutes: i64, revenue: Decimal) {
        self.minutes += minutes;
        self.revenue += revenue;
        self.count += 1;
    }

    /// RPM, absent when the bucket holds no minutes
    fn rpm(&self) -> Option<Decimal> {
        if self.minutes > 0 {
            Some(self.revenue / Decimal::from(self.minutes))
        } else {
            None
        }
    }
}

/// The last `MONTH_WINDOW` calendar months ending at `today`, oldest
/// first, as (year, month) pairs
fn month_window(today: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(MONTH_WINDOW);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..MONTH_WINDOW {
        months.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    months.reverse();
    months
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

/// Build the performance dashboard from raw appointments
///
/// `clients` resolves each appointment's pet to its breed and size;
/// appointments whose pet cannot be resolved still count toward the
/// KPIs and monthly series but not the breed/size buckets.
/// `groomer_filter` restricts the data to one groomer. `today` fixes
/// the monthly window.
pub fn build_performance_data(
    appointments: &[Appointment],
    clients: &[Client],
    groomer_filter: Option<&str>,
    today: NaiveDate,
) -> PerformanceData {
    // pet id -> (breed, size)
    let mut pets: HashMap<&str, (&str, WeightCategory)> = HashMap::new();
    for client in clients {
        for pet in &client.pets {
            pets.insert(pet.id.as_str(), (pet.breed.as_str(), pet.weight_category));
        }
    }

    let window = month_window(today);

    let mut overall = Bucket::default();
    let mut by_month: HashMap<(i32, u32), Bucket> = HashMap::new();
    let mut by_size: HashMap<WeightCategory, Bucket> = HashMap::new();
    let mut by_breed: HashMap<String, Bucket> = HashMap::new();
    let mut by_combo: HashMap<(String, WeightCategory), Bucket> = HashMap::new();

    for appointment in appointments {
        if !appointment.status.is_revenue() {
            continue;
        }
        if let Some(groomer_id) = groomer_filter {
            if appointment.groomer_id != groomer_id {
                continue;
            }
        }
        // Data-quality drops: unparseable date/times, non-positive duration
        let Some(date) = time::parse_date(&appointment.date) else {
            continue;
        };
        let minutes = match time::duration_minutes(&appointment.start_time, &appointment.end_time)
        {
            Some(m) if m > 0 => m,
            _ => continue,
        };

        let revenue = to_decimal(appointment.revenue());

        overall.add(minutes, revenue);
        by_month
            .entry((date.year(), date.month()))
            .or_default()
            .add(minutes, revenue);

        if let Some((breed, size)) = pets.get(appointment.pet_id.as_str()) {
            by_size.entry(*size).or_default().add(minutes, revenue);
            by_breed
                .entry((*breed).to_string())
                .or_default()
                .add(minutes, revenue);
            by_combo
                .entry(((*breed).to_string(), *size))
                .or_default()
                .add(minutes, revenue);
        }
    }

    if overall.count == 0 {
        return PerformanceData::default();
    }

    let kpis = PerformanceKpis {
        avg_minutes_per_appointment: overall.minutes as f64 / overall.count as f64,
        revenue_per_minute: overall.rpm().map(to_f64).unwrap_or(0.0),
        completed_count: overall.count,
    };

    // Monthly series: the 5-month axis is structural, so months without
    // data chart as zero bars (the absence rule applies to rankings)
    let rpm_by_month = window
        .iter()
        .map(|&(year, month)| MonthPoint {
            month: month_label(year, month),
            value: by_month
                .get(&(year, month))
                .and_then(Bucket::rpm)
                .map(to_f64)
                .unwrap_or(0.0),
        })
        .collect();
    let duration_by_month = window
        .iter()
        .map(|&(year, month)| MonthPoint {
            month: month_label(year, month),
            value: by_month
                .get(&(year, month))
                .filter(|b| b.count > 0)
                .map(|b| b.minutes as f64 / b.count as f64)
                .unwrap_or(0.0),
        })
        .collect();

    let rpm_by_size = WeightCategory::ALL
        .iter()
        .filter_map(|size| {
            let rpm = by_size.get(size).and_then(Bucket::rpm)?;
            Some(SizePoint {
                size: *size,
                value: to_f64(rpm),
            })
        })
        .collect();

    // Breed leaderboard: descending RPM, stable order beyond that
    let mut breed_rpms: Vec<(String, Decimal)> = by_breed
        .iter()
        .filter_map(|(breed, bucket)| Some((breed.clone(), bucket.rpm()?)))
        .collect();
    breed_rpms.sort_by(|a, b| a.0.cmp(&b.0));
    breed_rpms.sort_by(|a, b| b.1.cmp(&a.1));
    let earnings_by_breed = breed_rpms
        .iter()
        .take(TOP_BREEDS)
        .map(|(breed, rpm)| BreedEarning {
            breed: breed.clone(),
            rpm_display: format_usd(*rpm),
        })
        .collect();

    // One descending sort; top is the head, bottom the reversed tail.
    // With fewer than 6 combos the two lists overlap, which is expected.
    let mut combos: Vec<ComboRpm> = by_combo
        .iter()
        .filter_map(|((breed, size), bucket)| {
            let rpm = bucket.rpm()?;
            Some(ComboRpm {
                breed: breed.clone(),
                size: *size,
                rpm: to_f64(rpm),
                total_minutes: bucket.minutes,
                appointment_count: bucket.count,
            })
        })
        .collect();
    // Name order first so RPM ties come out deterministic under the
    // stable sort
    combos.sort_by(|a, b| (&a.breed, a.size.label()).cmp(&(&b.breed, b.size.label())));
    combos.sort_by(|a, b| b.rpm.partial_cmp(&a.rpm).unwrap_or(std::cmp::Ordering::Equal));
    let top_combos: Vec<ComboRpm> = combos.iter().take(TOP_COMBOS).cloned().collect();
    let bottom_combos: Vec<ComboRpm> = combos
        .iter()
        .rev()
        .take(TOP_COMBOS)
        .cloned()
        .collect();

    // Matrix rows: breeds ranked by appointment count, not RPM
    let mut breed_counts: Vec<(String, u32)> = by_breed
        .iter()
        .map(|(breed, bucket)| (breed.clone(), bucket.count))
        .collect();
    breed_counts.sort_by(|a, b| a.0.cmp(&b.0));
    breed_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let matrix = breed_counts
        .iter()
        .take(MATRIX_BREEDS)
        .map(|(breed, _)| MatrixRow {
            breed: breed.clone(),
            cells: WeightCategory::ALL
                .iter()
                .map(|size| {
                    by_combo
                        .get(&(breed.clone(), *size))
                        .and_then(Bucket::rpm)
                        .map(to_f64)
                })
                .collect(),
        })
        .collect();

    PerformanceData {
        kpis,
        rpm_by_month,
        duration_by_month,
        rpm_by_size,
        earnings_by_breed,
        top_combos,
        bottom_combos,
        matrix,
    }
}
