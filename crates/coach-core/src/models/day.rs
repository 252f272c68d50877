//! Days of a plan and the rules shared by every day-based editor.

use serde::{Deserialize, Serialize};

use super::PlanKind;
use crate::error::{AdminError, Result};

/// Upper bound on days per plan.
pub const MAX_DAYS: u32 = 7;

/// Meal options a meal day needs before it counts as complete. A wizard meal
/// day only holds options of its one meal type, so there it means three of
/// that type.
pub const MEAL_DAY_COMPLETE_THRESHOLD: usize = 3;

/// One day of a plan under construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// 1-based position, contiguous across the plan
    pub day_number: u32,

    /// Category (muscle group or meal type) chosen for the day
    #[serde(default)]
    pub category: Option<String>,

    /// Selected item ids, in selection order
    #[serde(default)]
    pub items: Vec<String>,
}

impl Day {
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            category: None,
            items: Vec::new(),
        }
    }

    /// Whether the day can be saved as part of a plan of `kind`.
    pub fn is_completed(&self, kind: PlanKind) -> bool {
        match kind {
            PlanKind::Workout => self.category.is_some() && !self.items.is_empty(),
            PlanKind::Meal => self.items.len() >= MEAL_DAY_COMPLETE_THRESHOLD,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    /// Removes `id` if selected, appends it otherwise. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.items.retain(|item| item != id);
            false
        } else {
            self.items.push(id.to_string());
            true
        }
    }
}

/// A day that carries a renumberable position.
pub trait Numbered {
    fn day_number(&self) -> u32;
    fn set_day_number(&mut self, day_number: u32);
}

impl Numbered for Day {
    fn day_number(&self) -> u32 {
        self.day_number
    }

    fn set_day_number(&mut self, day_number: u32) {
        self.day_number = day_number;
    }
}

/// Deletes day `target`, renumbers the rest contiguously from 1 and returns
/// the new active day.
///
/// The last remaining day cannot be deleted. If the active day was deleted
/// the pointer resets to day 1; if it came after the deleted day it moves
/// down by one.
pub fn remove_day<D: Numbered>(days: &mut Vec<D>, target: u32, active: u32) -> Result<u32> {
    if days.len() <= 1 {
        return Err(AdminError::invalid_input("day").with_reason("Cannot delete the last remaining day"));
    }
    let position = days
        .iter()
        .position(|day| day.day_number() == target)
        .ok_or_else(|| {
            AdminError::invalid_input("day").with_reason(format!("Day {target} does not exist"))
        })?;

    days.remove(position);
    for (number, day) in (1..).zip(days.iter_mut()) {
        day.set_day_number(number);
    }

    Ok(match active.cmp(&target) {
        std::cmp::Ordering::Equal => 1,
        std::cmp::Ordering::Greater => active - 1,
        std::cmp::Ordering::Less => active,
    })
}
