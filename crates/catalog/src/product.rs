use serde::{Deserialize, Serialize};

use supplestore_core::{Entity, ValueObject};

use crate::taxonomy::{Activity, Category, Goal};

/// Product identifier, stable across renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Non-negative price in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units. Saturates instead of overflowing.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Star rating, 0 to 5 filled stars.
///
/// Out-of-range inputs are clamped to [`Rating::MAX`] rather than rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Self {
        Self(stars.min(Self::MAX))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn empty_stars(&self) -> u8 {
        Self::MAX - self.0
    }
}

impl ValueObject for Rating {}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// A product record as supplied by the catalog (immutable, read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub activity: Option<Activity>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Minimal product with no tags; use the `with_*` methods to fill it in.
    pub fn new(id: ProductId, title: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            rating: Rating::default(),
            review_count: 0,
            category: None,
            goal: None,
            activity: None,
            tag: None,
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, stars: u8, review_count: u32) -> Self {
        self.rating = Rating::new(stars);
        self.review_count = review_count;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Slug of the category tag, if any.
    pub fn category_slug(&self) -> Option<&'static str> {
        self.category.map(|c| c.as_str())
    }

    /// Slug of the goal tag, if any.
    pub fn goal_slug(&self) -> Option<&'static str> {
        self.goal.map(|g| g.as_str())
    }

    /// Slug of the activity tag, if any.
    pub fn activity_slug(&self) -> Option<&'static str> {
        self.activity.map(|a| a.as_str())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
