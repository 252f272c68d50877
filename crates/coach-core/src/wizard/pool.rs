//! The items a plan draws from.

use crate::models::{same_category, Exercise, MealOption, MealType, PlanKind};

/// An exercise or a meal option.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Exercise(Exercise),
    Meal(MealOption),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Self::Exercise(exercise) => &exercise.id,
            Self::Meal(option) => &option.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Exercise(exercise) => &exercise.name,
            Self::Meal(option) => &option.food_name,
        }
    }

    /// Muscle group for exercises, meal type for meal options.
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::Exercise(exercise) => exercise.group(),
            Self::Meal(option) => Some(option.meal_type.as_str()),
        }
    }

    pub fn belongs_to(&self, category: &str) -> bool {
        match self {
            Self::Exercise(exercise) => exercise.belongs_to(category),
            Self::Meal(option) => category
                .parse::<MealType>()
                .is_ok_and(|meal_type| option.meal_type == meal_type),
        }
    }
}

/// Items available to a plan of one kind.
#[derive(Debug, Clone)]
pub struct ItemPool {
    kind: PlanKind,
    items: Vec<Item>,
}

impl ItemPool {
    pub fn exercises(exercises: Vec<Exercise>) -> Self {
        Self {
            kind: PlanKind::Workout,
            items: exercises.into_iter().map(Item::Exercise).collect(),
        }
    }

    pub fn meals(options: Vec<MealOption>) -> Self {
        Self {
            kind: PlanKind::Meal,
            items: options.into_iter().map(Item::Meal).collect(),
        }
    }

    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items offered for a day with the given category.
    pub fn offered<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.belongs_to(category))
    }

    pub fn is_offered(&self, id: &str, category: &str) -> bool {
        self.get(id).is_some_and(|item| item.belongs_to(category))
    }

    /// Distinct groups present in the pool, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for group in self.items.iter().filter_map(Item::group) {
            if !seen.iter().any(|known| same_category(known, group)) {
                seen.push(group.to_string());
            }
        }
        seen
    }
}
