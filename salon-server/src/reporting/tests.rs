use chrono::NaiveDate;

use shared::models::{Appointment, AppointmentStatus, Client, Pet, WeightCategory};

use super::performance::build_performance_data;

fn pet(id: &str, breed: &str, weight: f64) -> Pet {
    Pet {
        id: id.to_string(),
        name: format!("pet-{}", id),
        breed: breed.to_string(),
        weight,
        weight_category: WeightCategory::from_weight(weight),
        temperament: vec![],
        grooming_notes: None,
    }
}

fn client_with_pets(pets: Vec<Pet>) -> Client {
    Client {
        id: "c1".to_string(),
        name: "Dana".to_string(),
        email: None,
        phone: None,
        address: None,
        notes: None,
        pets,
        created_at: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn appt(
    id: &str,
    date: &str,
    start: &str,
    end: &str,
    price: f64,
    tip: Option<f64>,
    pet_id: &str,
    groomer_id: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        client_id: "c1".to_string(),
        client_name: "Dana".to_string(),
        pet_id: pet_id.to_string(),
        pet_name: format!("pet-{}", pet_id),
        groomer_id: groomer_id.to_string(),
        groomer_name: format!("groomer-{}", groomer_id),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        services: vec![],
        status,
        total_price: price,
        tip_amount: tip,
        pet_weight_category: None,
        notes: None,
    }
}

fn completed(
    id: &str,
    date: &str,
    start: &str,
    end: &str,
    price: f64,
    tip: Option<f64>,
    pet_id: &str,
) -> Appointment {
    appt(
        id,
        date,
        start,
        end,
        price,
        tip,
        pet_id,
        "g1",
        AppointmentStatus::Completed,
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

#[test]
fn worked_example_single_poodle() {
    let clients = vec![client_with_pets(vec![pet("p1", "Poodle", 35.0)])];
    let appointments = vec![completed(
        "a1",
        "2024-01-05",
        "9:00 AM",
        "10:30 AM",
        90.0,
        Some(10.0),
        "p1",
    )];

    let data = build_performance_data(&appointments, &clients, None, today());

    assert!(!data.is_empty());
    assert_eq!(data.kpis.completed_count, 1);
    assert_eq!(data.kpis.avg_minutes_per_appointment, 90.0);
    // 100 / 90, rounded to cents
    assert_eq!(data.kpis.revenue_per_minute, 1.11);
    assert_eq!(data.earnings_by_breed.len(), 1);
    assert_eq!(data.earnings_by_breed[0].breed, "Poodle");
    assert_eq!(data.earnings_by_breed[0].rpm_display, "$1.11");
}

#[test]
fn negative_and_unparseable_durations_contribute_nothing() {
    let clients = vec![client_with_pets(vec![pet("p1", "Poodle", 35.0)])];
    let appointments = vec![
        // End before start: negative duration
        completed("a1", "2024-01-05", "10:00 AM", "9:00 AM", 90.0, None, "p1"),
        // Zero duration
        completed("a2", "2024-01-06", "9:00 AM", "9:00 AM", 50.0, None, "p1"),
        // Garbage time
        completed("a3", "2024-01-07", "soonish", "10:00 AM", 70.0, None, "p1"),
        // Garbage date
        completed("a4", "01/08/2024", "9:00 AM", "10:00 AM", 70.0, None, "p1"),
    ];

    let data = build_performance_data(&appointments, &clients, None, today());

    assert!(data.is_empty());
    assert_eq!(data.kpis.completed_count, 0);
    assert!(data.rpm_by_month.is_empty());
    assert!(data.rpm_by_size.is_empty());
    assert!(data.earnings_by_breed.is_empty());
    assert!(data.top_combos.is_empty());
    assert!(data.bottom_combos.is_empty());
    assert!(data.matrix.is_empty());
}

#[test]
fn only_completed_and_paid_count() {
    let clients = vec![client_with_pets(vec![pet("p1", "Poodle", 35.0)])];
    let appointments = vec![
        appt(
            "a1",
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            60.0,
            None,
            "p1",
            "g1",
            AppointmentStatus::Scheduled,
        ),
        appt(
            "a2",
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            60.0,
            None,
            "p1",
            "g1",
            AppointmentStatus::Cancelled,
        ),
        appt(
            "a3",
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            60.0,
            None,
            "p1",
            "g1",
            AppointmentStatus::Paid,
        ),
    ];

    let data = build_performance_data(&appointments, &clients, None, today());
    assert_eq!(data.kpis.completed_count, 1);
}

#[test]
fn groomer_filter_restricts_all_buckets() {
    let clients = vec![client_with_pets(vec![
        pet("p1", "Poodle", 35.0),
        pet("p2", "Husky", 55.0),
    ])];
    let appointments = vec![
        appt(
            "a1",
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            60.0,
            None,
            "p1",
            "g1",
            AppointmentStatus::Completed,
        ),
        appt(
            "a2",
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            120.0,
            None,
            "p2",
            "g2",
            AppointmentStatus::Completed,
        ),
    ];

    let data = build_performance_data(&appointments, &clients, Some("g1"), today());

    assert_eq!(data.kpis.completed_count, 1);
    assert_eq!(data.earnings_by_breed.len(), 1);
    assert_eq!(data.earnings_by_breed[0].breed, "Poodle");
}

#[test]
fn rpm_is_revenue_over_minutes_exactly() {
    let clients = vec![client_with_pets(vec![pet("p1", "Corgi", 25.0)])];
    // Two appointments: 60 min / $90 and 30 min / $45 => 135 / 90 = 1.5
    let appointments = vec![
        completed("a1", "2024-01-05", "9:00 AM", "10:00 AM", 90.0, None, "p1"),
        completed("a2", "2024-01-06", "1:00 PM", "1:30 PM", 45.0, None, "p1"),
    ];

    let data = build_performance_data(&appointments, &clients, None, today());

    assert_eq!(data.kpis.revenue_per_minute, 1.5);
    assert_eq!(data.earnings_by_breed[0].rpm_display, "$1.50");
    // Only the medium size bucket exists; absent sizes are absent, not zero
    assert_eq!(data.rpm_by_size.len(), 1);
    assert_eq!(data.rpm_by_size[0].size, WeightCategory::Medium);
}

#[test]
fn top_and_bottom_combos_share_one_sort() {
    let clients = vec![client_with_pets(vec![
        pet("p1", "Poodle", 10.0),  // small, rpm 2.0
        pet("p2", "Husky", 55.0),   // large, rpm 1.0
        pet("p3", "Beagle", 25.0),  // medium, rpm 0.5
    ])];
    let appointments = vec![
        completed("a1", "2024-01-05", "9:00 AM", "10:00 AM", 120.0, None, "p1"),
        completed("a2", "2024-01-05", "9:00 AM", "10:00 AM", 60.0, None, "p2"),
        completed("a3", "2024-01-05", "9:00 AM", "10:00 AM", 30.0, None, "p3"),
    ];

    let data = build_performance_data(&appointments, &clients, None, today());

    // Three combos: with fewer than six, top and bottom overlap
    let top: Vec<&str> = data.top_combos.iter().map(|c| c.breed.as_str()).collect();
    let bottom: Vec<&str> = data.bottom_combos.iter().map(|c| c.breed.as_str()).collect();
    assert_eq!(top, vec!["Poodle", "Husky", "Beagle"]);
    // Reversed tail: worst first
    assert_eq!(bottom, vec!["Beagle", "Husky", "Poodle"]);
    assert_eq!(data.top_combos[0].rpm, 2.0);
    assert_eq!(data.bottom_combos[0].rpm, 0.5);
}

#[test]
fn matrix_caps_rows_and_distinguishes_missing_cells() {
    // Seven breeds; "Beagle" gets two appointments so it must rank first
    let breeds = [
        "Beagle", "Poodle", "Husky", "Corgi", "Terrier", "Spaniel", "Akita",
    ];
    let pets: Vec<Pet> = breeds
        .iter()
        .enumerate()
        .map(|(i, breed)| pet(&format!("p{}", i), breed, 10.0))
        .collect();
    let clients = vec![client_with_pets(pets)];

    let mut appointments = vec![completed(
        "extra",
        "2024-01-04",
        "9:00 AM",
        "10:00 AM",
        60.0,
        None,
        "p0",
    )];
    for i in 0..breeds.len() {
        appointments.push(completed(
            &format!("a{}", i),
            "2024-01-05",
            "9:00 AM",
            "10:00 AM",
            60.0,
            None,
            &format!("p{}", i),
        ));
    }

    let data = build_performance_data(&appointments, &clients, None, today());

    assert_eq!(data.matrix.len(), 6);
    assert_eq!(data.matrix[0].breed, "Beagle");
    for row in &data.matrix {
        assert_eq!(row.cells.len(), 4);
        // All pets are small: the small column has data, the rest are None
        assert!(row.cells[0].is_some());
        assert_eq!(row.cells[1], None);
        assert_eq!(row.cells[2], None);
        assert_eq!(row.cells[3], None);
    }
}

#[test]
fn unresolvable_pet_keeps_kpis_but_not_breed_buckets() {
    let clients = vec![client_with_pets(vec![])];
    let appointments = vec![completed(
        "a1",
        "2024-01-05",
        "9:00 AM",
        "10:00 AM",
        60.0,
        None,
        "ghost",
    )];

    let data = build_performance_data(&appointments, &clients, None, today());

    assert_eq!(data.kpis.completed_count, 1);
    assert!(data.earnings_by_breed.is_empty());
    assert!(data.matrix.is_empty());
}

#[test]
fn monthly_window_is_five_months_oldest_first() {
    let clients = vec![client_with_pets(vec![pet("p1", "Poodle", 10.0)])];
    let appointments = vec![completed(
        "a1",
        "2024-01-05",
        "9:00 AM",
        "10:00 AM",
        60.0,
        None,
        "p1",
    )];

    let data = build_performance_data(&appointments, &clients, None, today());

    let labels: Vec<&str> = data.rpm_by_month.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan"]);
    // Only January has data; the other months chart as zero bars
    assert_eq!(data.rpm_by_month[4].value, 1.0);
    assert_eq!(data.rpm_by_month[0].value, 0.0);
    assert_eq!(data.duration_by_month[4].value, 60.0);
}
