//! Standard template set
//!
//! Each template surfaces one kind of observation and stays silent unless the
//! snapshot crosses its threshold. Only `PeakHourTemplate` and
//! `OperatorTipTemplate` always fire, so a feed is never empty for a known store.

use super::item::{ScoopItem, ScoopKind};
use super::snapshot::MetricsSnapshot;
use super::template::{ScoopTemplate, TemplateError};
use crate::core::fiscal::month_abbrev;
use crate::ledger::percent_change;

/// Source label for items computed from point-of-sale metrics.
const POS_SOURCE: &str = "POS daily summary";

/// Source label for items computed from the cost ledger.
const LEDGER_SOURCE: &str = "Vendor cost ledger";

/// The default templates, in evaluation order.
pub fn standard_templates() -> Vec<Box<dyn ScoopTemplate>> {
    vec![
        Box::new(SalesPaceTemplate { threshold_pct: 3.0 }),
        Box::new(LaborWatchTemplate),
        Box::new(FoodCostTemplate),
        Box::new(TopSellerTemplate),
        Box::new(CheckAverageTemplate { threshold_pct: 2.0 }),
        Box::new(DeliveryMixTemplate { threshold_pct: 20.0 }),
        Box::new(ReviewPulseTemplate { min_reviews: 5 }),
        Box::new(WasteWatchTemplate { threshold_pct: 3.5 }),
        Box::new(CostMoverTemplate { threshold_pct: 5.0 }),
        Box::new(UtilitySwingTemplate { threshold_pct: 10.0 }),
        Box::new(InsuranceRenewalTemplate { lead_months: 2 }),
        Box::new(PeakHourTemplate),
        Box::new(OperatorTipTemplate),
    ]
}

/// Sales vs the same weekday last week
pub struct SalesPaceTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for SalesPaceTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.prior_week_sales <= 0 {
            return Err(TemplateError::MissingMetric("prior_week_sales"));
        }
        let delta = percent_change(s.net_sales - s.prior_week_sales, s.prior_week_sales);
        if delta.abs() < self.threshold_pct {
            return Ok(None);
        }
        let weekday = s.date().format("%A");
        let (direction, kind) = if delta > 0.0 {
            ("up", ScoopKind::Trend)
        } else {
            ("down", ScoopKind::Alert)
        };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                kind,
                format!("Sales {} {:.1}% vs last {}", direction, delta.abs(), weekday),
                format!(
                    "{} booked {} in net sales, compared with {} on the same day last week.",
                    s.store_name,
                    dollars(s.net_sales),
                    dollars(s.prior_week_sales)
                ),
            )
            .with_source(POS_SOURCE),
        ))
    }
}

/// Labor cost against its target band
pub struct LaborWatchTemplate;

impl ScoopTemplate for LaborWatchTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let gap = s.labor_pct - s.labor_target_pct;
        let item = if gap > 1.5 {
            ScoopItem::new(
                s,
                index,
                ScoopKind::Alert,
                format!("Labor running at {:.1}% of sales", s.labor_pct),
                format!(
                    "That is {:.1} points over the {:.0}% target. Check whether closing shifts can be trimmed.",
                    gap, s.labor_target_pct
                ),
            )
        } else if gap < -2.0 {
            ScoopItem::new(
                s,
                index,
                ScoopKind::Insight,
                "Lean labor day",
                format!(
                    "Labor came in at {:.1}%, {:.1} points under target. Make sure service times held up.",
                    s.labor_pct,
                    gap.abs()
                ),
            )
        } else {
            return Ok(None);
        };
        Ok(Some(item.with_source(POS_SOURCE)))
    }
}

/// Food cost above target
pub struct FoodCostTemplate;

impl ScoopTemplate for FoodCostTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let gap = s.food_cost_pct - s.food_cost_target_pct;
        if gap <= 1.0 {
            return Ok(None);
        }
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Alert,
                format!("Food cost at {:.1}%", s.food_cost_pct),
                format!(
                    "Food cost is {:.1} points above the {:.0}% target. Portioning and recent invoice prices are the usual suspects.",
                    gap, s.food_cost_target_pct
                ),
            )
            .with_source(POS_SOURCE),
        ))
    }
}

/// Best-selling menu item
pub struct TopSellerTemplate;

impl ScoopTemplate for TopSellerTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let Some(item) = &s.top_item else {
            return Ok(None);
        };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Milestone,
                format!("Menu star: {}", item),
                format!("{} sold {} units yesterday, the most of any item.", item, s.top_item_units),
            )
            .with_source(POS_SOURCE),
        ))
    }
}

/// Average check movement
pub struct CheckAverageTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for CheckAverageTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.prior_average_check <= 0 {
            return Err(TemplateError::InvalidMetric {
                name: "prior_average_check",
                value: s.prior_average_check.to_string(),
            });
        }
        let delta = percent_change(s.average_check - s.prior_average_check, s.prior_average_check);
        if delta.abs() < self.threshold_pct {
            return Ok(None);
        }
        let verb = if delta > 0.0 { "rose" } else { "slipped" };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Insight,
                format!("Average check {} to {}", verb, dollars(s.average_check)),
                format!(
                    "{} guests averaged {} per check, {:+.1}% against the usual {}.",
                    s.guest_count,
                    dollars(s.average_check),
                    delta,
                    dollars(s.prior_average_check)
                ),
            )
            .with_detail("Upsell prompts on desserts and drinks move this number fastest."),
        ))
    }
}

/// Share of sales through delivery platforms
pub struct DeliveryMixTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for DeliveryMixTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.delivery_share_pct < self.threshold_pct {
            return Ok(None);
        }
        Ok(Some(ScoopItem::new(
            s,
            index,
            ScoopKind::Insight,
            format!("Delivery is {:.0}% of sales", s.delivery_share_pct),
            "Platform commissions eat into these orders. Consider steering regulars to direct online ordering.",
        )))
    }
}

/// New guest reviews
pub struct ReviewPulseTemplate {
    pub min_reviews: u32,
}

impl ScoopTemplate for ReviewPulseTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.new_reviews < self.min_reviews {
            return Ok(None);
        }
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Milestone,
                format!("{} new reviews this week", s.new_reviews),
                format!(
                    "Guests rated {} {:.1} stars on average. Replying within a day keeps the rating climbing.",
                    s.store_name, s.review_rating
                ),
            )
            .with_source("Review aggregator"),
        ))
    }
}

/// Kitchen waste above tolerance
pub struct WasteWatchTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for WasteWatchTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.waste_pct <= self.threshold_pct {
            return Ok(None);
        }
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Alert,
                format!("Waste log at {:.1}% of food purchases", s.waste_pct),
                "Prep pars may be set too high for current volume.",
            )
            .with_detail("Compare prep sheets against the last two weeks of item counts."),
        ))
    }
}

/// Largest vendor cost change this month
pub struct CostMoverTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for CostMoverTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let (Some(mover), Some(fm)) = (&s.top_cost_mover, s.ledger_month) else {
            return Ok(None);
        };
        if mover.change_pct.abs() < self.threshold_pct {
            return Ok(None);
        }
        let verb = if mover.change_pct > 0.0 { "jumped" } else { "dropped" };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::CostWatch,
                format!("{} bill {} {:.0}%", mover.vendor_name, verb, mover.change_pct.abs()),
                format!(
                    "{} ({}) came to {} in {}, against {} the month before.",
                    mover.vendor_name,
                    mover.category,
                    dollars(mover.amount),
                    fm.label(),
                    dollars(mover.prior_amount)
                ),
            )
            .with_source(LEDGER_SOURCE),
        ))
    }
}

/// Seasonal utility swing
pub struct UtilitySwingTemplate {
    pub threshold_pct: f64,
}

impl ScoopTemplate for UtilitySwingTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let Some(fm) = s.ledger_month else {
            return Ok(None);
        };
        if s.utility_prior_total <= 0 {
            return Ok(None);
        }
        let delta = percent_change(s.utility_total - s.utility_prior_total, s.utility_prior_total);
        if delta.abs() < self.threshold_pct {
            return Ok(None);
        }
        let season = if delta > 0.0 { "climbing" } else { "easing" };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::CostWatch,
                format!("Utilities {} ({:+.0}%)", season, delta),
                format!(
                    "Electric, gas and water totaled {} for {}, versus {} the prior month.",
                    dollars(s.utility_total),
                    fm.label(),
                    dollars(s.utility_prior_total)
                ),
            )
            .with_source(LEDGER_SOURCE),
        ))
    }
}

/// Upcoming insurance premium step
pub struct InsuranceRenewalTemplate {
    pub lead_months: usize,
}

impl ScoopTemplate for InsuranceRenewalTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let (Some(renewal), Some(now)) = (&s.insurance_renewal, s.ledger_month) else {
            return Ok(None);
        };
        let renewal_index = renewal.fiscal_month.index;
        if renewal_index < now.index || renewal_index - now.index > self.lead_months {
            return Ok(None);
        }
        let title = if renewal_index == now.index {
            format!("{} premium renews this month", renewal.vendor_name)
        } else {
            format!(
                "{} renewal due in {}",
                renewal.vendor_name,
                month_abbrev(renewal.fiscal_month.month)
            )
        };
        Ok(Some(
            ScoopItem::new(
                s,
                index,
                ScoopKind::Alert,
                title,
                format!(
                    "The monthly premium moves from {} to {}. Shop quotes before the renewal locks in.",
                    dollars(renewal.prior_amount),
                    dollars(renewal.amount)
                ),
            )
            .with_source(LEDGER_SOURCE),
        ))
    }
}

/// Busiest hour reminder
pub struct PeakHourTemplate;

impl ScoopTemplate for PeakHourTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        if s.peak_hour > 23 {
            return Err(TemplateError::InvalidMetric {
                name: "peak_hour",
                value: s.peak_hour.to_string(),
            });
        }
        Ok(Some(ScoopItem::new(
            s,
            index,
            ScoopKind::Tip,
            format!("Rush hour: {}", clock_label(s.peak_hour)),
            format!(
                "Yesterday's busiest hour started at {}. Stage prep and breaks around it.",
                clock_label(s.peak_hour)
            ),
        )))
    }
}

const OPERATOR_TIPS: &[(&str, &str)] = &[
    (
        "Count the walk-in on the same day each week",
        "Consistent inventory timing makes week-over-week food cost comparable.",
    ),
    (
        "Review voids before close",
        "A quick scan of voids and comps catches training gaps early.",
    ),
    (
        "Rotate the specials board",
        "Feature items built on ingredients that are over par to cut waste.",
    ),
    (
        "Re-bid one vendor each quarter",
        "Even a single competing quote keeps distributor pricing honest.",
    ),
    (
        "Cross-train one closer",
        "A second person who can close the books removes a single point of failure.",
    ),
];

/// Rotating operator tip
pub struct OperatorTipTemplate;

impl ScoopTemplate for OperatorTipTemplate {
    fn evaluate(&self, s: &MetricsSnapshot, index: usize) -> Result<Option<ScoopItem>, TemplateError> {
        let pick = (s.seed.value() as usize + index) % OPERATOR_TIPS.len();
        let (title, body) = OPERATOR_TIPS[pick];
        Ok(Some(ScoopItem::new(s, index, ScoopKind::Tip, title, body)))
    }
}

/// `"$13,200"` style whole-dollar label for an amount in cents.
pub fn dollars(cents: i64) -> String {
    let whole = (cents as f64 / 100.0).round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn clock_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{} AM", hour),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}
