//! Payroll summarization
//!
//! Groups completed/paid appointments in a pay period by groomer and
//! totals gross revenue, tips and net pay.
//!
//! Net pay is deliberately a flat pass-through of appointment revenue:
//! the configured [`CompensationPlan`](shared::models::CompensationPlan)
//! (commission, hourly, guarantee, overrides) is stored with each staff
//! record but is not applied here. The screens this replaces displayed
//! exactly this pass-through, so the behavior is preserved until the
//! compensation rules are formally wired in.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shared::models::{Appointment, Staff, Transaction};

use crate::utils::money::{to_decimal, to_f64};
use crate::utils::time;

/// Per-staff payroll totals for one period
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPayroll {
    pub staff_id: String,
    pub staff_name: String,
    pub appointment_count: u32,
    /// Service revenue excluding tips
    pub gross_revenue: f64,
    pub tips: f64,
    /// gross + tips (flat pass-through, no commission math)
    pub net_pay: f64,
}

/// Payroll summary across all groomers for one period
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub staff: Vec<StaffPayroll>,
    pub total_gross: f64,
    pub total_tips: f64,
    pub total_net: f64,
}

/// One appointment line in a staff payroll breakdown
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDetailRow {
    pub appointment_id: String,
    pub date: String,
    pub client_name: String,
    pub pet_name: String,
    pub services_total: f64,
    pub tip: f64,
}

/// Per-appointment breakdown for one staff member
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDetail {
    pub totals: StaffPayroll,
    pub rows: Vec<PayrollDetailRow>,
}

#[derive(Default)]
struct Accumulator {
    count: u32,
    gross: Decimal,
    tips: Decimal,
}

/// Appointment revenue split into (gross, tip)
///
/// The matched transaction is authoritative when present — gross is
/// `total - tip` — otherwise the appointment's own price and tip are
/// used.
fn revenue_split(
    appointment: &Appointment,
    transaction: Option<&Transaction>,
) -> (Decimal, Decimal) {
    match transaction {
        Some(txn) => {
            let tip = to_decimal(txn.tip_amount);
            (to_decimal(txn.total) - tip, tip)
        }
        None => (
            to_decimal(appointment.total_price),
            to_decimal(appointment.tip_amount.unwrap_or(0.0)),
        ),
    }
}

/// Summarize payroll for every groomer over the inclusive date range
///
/// Includes active groomers with zero appointments so the overview
/// lists the whole team.
pub fn summarize(
    staff: &[Staff],
    appointments: &[Appointment],
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> PayrollSummary {
    let by_appointment: HashMap<&str, &Transaction> = transactions
        .iter()
        .map(|t| (t.appointment_id.as_str(), t))
        .collect();

    let mut buckets: HashMap<&str, Accumulator> = HashMap::new();
    for member in staff.iter().filter(|s| s.is_groomer && s.is_active) {
        buckets.entry(member.id.as_str()).or_default();
    }

    for appointment in appointments {
        if !appointment.status.is_revenue() {
            continue;
        }
        let Some(date) = time::parse_date(&appointment.date) else {
            continue;
        };
        if date < start || date > end {
            continue;
        }
        let Some(bucket) = buckets.get_mut(appointment.groomer_id.as_str()) else {
            // Groomer no longer on staff; skipped like the original
            continue;
        };

        let txn = by_appointment.get(appointment.id.as_str()).copied();
        let (gross, tip) = revenue_split(appointment, txn);
        bucket.count += 1;
        bucket.gross += gross;
        bucket.tips += tip;
    }

    let mut rows: Vec<StaffPayroll> = staff
        .iter()
        .filter(|s| s.is_groomer && s.is_active)
        .map(|member| {
            let bucket = buckets.get(member.id.as_str()).map_or_else(
                || (0, Decimal::ZERO, Decimal::ZERO),
                |b| (b.count, b.gross, b.tips),
            );
            StaffPayroll {
                staff_id: member.id.clone(),
                staff_name: member.name.clone(),
                appointment_count: bucket.0,
                gross_revenue: to_f64(bucket.1),
                tips: to_f64(bucket.2),
                net_pay: to_f64(bucket.1 + bucket.2),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.net_pay
            .partial_cmp(&a.net_pay)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_gross: Decimal = rows.iter().map(|r| to_decimal(r.gross_revenue)).sum();
    let total_tips: Decimal = rows.iter().map(|r| to_decimal(r.tips)).sum();

    PayrollSummary {
        period_start: start,
        period_end: end,
        staff: rows,
        total_gross: to_f64(total_gross),
        total_tips: to_f64(total_tips),
        total_net: to_f64(total_gross + total_tips),
    }
}

/// Per-appointment breakdown for one staff member over the range
pub fn detail(
    member: &Staff,
    appointments: &[Appointment],
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> PayrollDetail {
    let summary = summarize(
        std::slice::from_ref(member),
        appointments,
        transactions,
        start,
        end,
    );
    let totals = summary
        .staff
        .into_iter()
        .next()
        .unwrap_or(StaffPayroll {
            staff_id: member.id.clone(),
            staff_name: member.name.clone(),
            appointment_count: 0,
            gross_revenue: 0.0,
            tips: 0.0,
            net_pay: 0.0,
        });

    let by_appointment: HashMap<&str, &Transaction> = transactions
        .iter()
        .map(|t| (t.appointment_id.as_str(), t))
        .collect();
    let mut rows: Vec<PayrollDetailRow> = appointments
        .iter()
        .filter(|a| a.groomer_id == member.id && a.status.is_revenue())
        .filter(|a| {
            time::parse_date(&a.date)
                .map(|d| start <= d && d <= end)
                .unwrap_or(false)
        })
        .map(|a| {
            let (gross, tip) = revenue_split(a, by_appointment.get(a.id.as_str()).copied());
            PayrollDetailRow {
                appointment_id: a.id.clone(),
                date: a.date.clone(),
                client_name: a.client_name.clone(),
                pet_name: a.pet_name.clone(),
                services_total: to_f64(gross),
                tip: to_f64(tip),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    PayrollDetail { totals, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AppointmentStatus, CompensationPlan, PaymentMethod};

    fn staff_member(id: &str, name: &str, commission: Option<f64>) -> Staff {
        Staff {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            phone: None,
            role: "Groomer".to_string(),
            is_groomer: true,
            is_active: true,
            compensation: CompensationPlan {
                commission_percent: commission,
                ..CompensationPlan::default()
            },
        }
    }

    fn appointment(
        id: &str,
        groomer_id: &str,
        date: &str,
        price: f64,
        tip: Option<f64>,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_id: "c1".to_string(),
            client_name: "Dana".to_string(),
            pet_id: "p1".to_string(),
            pet_name: "Biscuit".to_string(),
            groomer_id: groomer_id.to_string(),
            groomer_name: "G".to_string(),
            date: date.to_string(),
            start_time: "9:00 AM".to_string(),
            end_time: "10:00 AM".to_string(),
            services: vec![],
            status,
            total_price: price,
            tip_amount: tip,
            pet_weight_category: None,
            notes: None,
        }
    }

    fn transaction(appointment_id: &str, total: f64, tip: f64) -> Transaction {
        Transaction {
            id: format!("t-{}", appointment_id),
            appointment_id: appointment_id.to_string(),
            items: vec![],
            subtotal: total - tip,
            discount: 0.0,
            fees: 0.0,
            tip_amount: tip,
            total,
            payment_method: PaymentMethod {
                kind: "card".to_string(),
                card_brand: Some("visa".to_string()),
                card_last4: Some("4242".to_string()),
            },
            created_at: None,
        }
    }

    fn range() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn transaction_total_minus_tip_is_gross() {
        let staff = vec![staff_member("g1", "Mo", None)];
        let appointments = vec![appointment(
            "a1",
            "g1",
            "2024-01-10",
            90.0,
            Some(10.0),
            AppointmentStatus::Paid,
        )];
        // Transaction says $110 with $15 tip; it wins over the appointment
        let transactions = vec![transaction("a1", 110.0, 15.0)];
        let (start, end) = range();

        let summary = summarize(&staff, &appointments, &transactions, start, end);
        assert_eq!(summary.staff.len(), 1);
        assert_eq!(summary.staff[0].gross_revenue, 95.0);
        assert_eq!(summary.staff[0].tips, 15.0);
        assert_eq!(summary.staff[0].net_pay, 110.0);
    }

    #[test]
    fn falls_back_to_appointment_when_no_transaction() {
        let staff = vec![staff_member("g1", "Mo", None)];
        let appointments = vec![appointment(
            "a1",
            "g1",
            "2024-01-10",
            90.0,
            Some(10.0),
            AppointmentStatus::Completed,
        )];
        let (start, end) = range();

        let summary = summarize(&staff, &appointments, &[], start, end);
        assert_eq!(summary.staff[0].gross_revenue, 90.0);
        assert_eq!(summary.staff[0].tips, 10.0);
        assert_eq!(summary.total_net, 100.0);
    }

    #[test]
    fn commission_config_does_not_change_net_pay() {
        // 40% commission configured; pay remains the flat pass-through
        let staff = vec![staff_member("g1", "Mo", Some(40.0))];
        let appointments = vec![appointment(
            "a1",
            "g1",
            "2024-01-10",
            100.0,
            None,
            AppointmentStatus::Completed,
        )];
        let (start, end) = range();

        let summary = summarize(&staff, &appointments, &[], start, end);
        assert_eq!(summary.staff[0].net_pay, 100.0);
    }

    #[test]
    fn out_of_range_and_non_revenue_excluded() {
        let staff = vec![staff_member("g1", "Mo", None)];
        let appointments = vec![
            appointment("a1", "g1", "2023-12-31", 50.0, None, AppointmentStatus::Paid),
            appointment("a2", "g1", "2024-01-10", 60.0, None, AppointmentStatus::Scheduled),
            appointment("a3", "g1", "2024-01-10", 70.0, None, AppointmentStatus::Cancelled),
            appointment("a4", "g1", "2024-01-10", 80.0, None, AppointmentStatus::Completed),
        ];
        let (start, end) = range();

        let summary = summarize(&staff, &appointments, &[], start, end);
        assert_eq!(summary.staff[0].appointment_count, 1);
        assert_eq!(summary.staff[0].gross_revenue, 80.0);
    }

    #[test]
    fn idle_groomers_still_listed() {
        let staff = vec![staff_member("g1", "Mo", None), staff_member("g2", "Lee", None)];
        let appointments = vec![appointment(
            "a1",
            "g1",
            "2024-01-10",
            100.0,
            None,
            AppointmentStatus::Completed,
        )];
        let (start, end) = range();

        let summary = summarize(&staff, &appointments, &[], start, end);
        assert_eq!(summary.staff.len(), 2);
        let lee = summary.staff.iter().find(|s| s.staff_id == "g2").unwrap();
        assert_eq!(lee.appointment_count, 0);
        assert_eq!(lee.net_pay, 0.0);
    }

    #[test]
    fn detail_rows_sorted_by_date() {
        let member = staff_member("g1", "Mo", None);
        let appointments = vec![
            appointment("a2", "g1", "2024-01-20", 60.0, None, AppointmentStatus::Paid),
            appointment("a1", "g1", "2024-01-10", 50.0, Some(5.0), AppointmentStatus::Completed),
        ];
        let (start, end) = range();

        let d = detail(&member, &appointments, &[], start, end);
        assert_eq!(d.totals.appointment_count, 2);
        assert_eq!(d.rows.len(), 2);
        assert_eq!(d.rows[0].appointment_id, "a1");
        assert_eq!(d.rows[1].appointment_id, "a2");
        assert_eq!(d.rows[0].tip, 5.0);
    }
}
