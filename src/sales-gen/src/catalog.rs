use common::Category;
use rand::distributions::Uniform;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_distr::Poisson;

use crate::error::Result;
use crate::error::SalesGenError;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryConfig {
    pub category: Category,
    pub weight: f64,
    // base price is drawn from [min_price, max_price)
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountConfig {
    pub factor: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub categories: Vec<CategoryConfig>,
    pub discounts: Vec<DiscountConfig>,
    pub quantity_mean: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let category = |category, weight, min_price, max_price| CategoryConfig {
            category,
            weight,
            min_price,
            max_price,
        };
        let discount = |factor, weight| DiscountConfig { factor, weight };

        Self {
            categories: vec![
                category(Category::Electronics, 0.28, 40., 300.),
                category(Category::Home, 0.22, 10., 120.),
                category(Category::Beauty, 0.18, 5., 60.),
                category(Category::Toys, 0.16, 5., 80.),
                category(Category::Grocery, 0.16, 1., 30.),
            ],
            discounts: vec![
                discount(1.0, 0.7),
                discount(0.9, 0.15),
                discount(0.8, 0.1),
                discount(0.7, 0.05),
            ],
            quantity_mean: 1.8,
        }
    }
}

pub struct Catalog {
    categories: Vec<Category>,
    category_weight_idx: WeightedIndex<f64>,
    price_dists: Vec<Uniform<f64>>,
    discounts: Vec<f64>,
    discount_weight_idx: WeightedIndex<f64>,
    quantity_dist: Poisson<f64>,
}

impl Catalog {
    pub fn try_new(cfg: CatalogConfig) -> Result<Self> {
        if cfg.categories.is_empty() {
            return Err(SalesGenError::InvalidConfig(
                "catalog must contain at least one category".to_string(),
            ));
        }

        let mut price_dists = Vec::with_capacity(cfg.categories.len());
        for c in cfg.categories.iter() {
            if !(c.min_price.is_finite() && c.max_price.is_finite() && c.min_price < c.max_price)
            {
                return Err(SalesGenError::InvalidConfig(format!(
                    "invalid price range [{}, {}) for {}",
                    c.min_price, c.max_price, c.category
                )));
            }
            price_dists.push(Uniform::new(c.min_price, c.max_price));
        }

        let category_weight_idx = WeightedIndex::new(cfg.categories.iter().map(|c| c.weight))
            .map_err(|err| SalesGenError::Internal(err.to_string()))?;
        let discount_weight_idx = WeightedIndex::new(cfg.discounts.iter().map(|d| d.weight))
            .map_err(|err| SalesGenError::Internal(err.to_string()))?;
        let quantity_dist = Poisson::new(cfg.quantity_mean)
            .map_err(|err| SalesGenError::Internal(err.to_string()))?;

        Ok(Self {
            categories: cfg.categories.iter().map(|c| c.category).collect(),
            category_weight_idx,
            price_dists,
            discounts: cfg.discounts.iter().map(|d| d.factor).collect(),
            discount_weight_idx,
            quantity_dist,
        })
    }

    pub fn product_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (Category, f64) {
        let idx = self.category_weight_idx.sample(rng);
        (self.categories[idx], self.price_dists[idx].sample(rng))
    }

    pub fn discount_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.discounts[self.discount_weight_idx.sample(rng)]
    }

    pub fn quantity_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let q: f64 = self.quantity_dist.sample(rng);
        (q as i64).max(1)
    }
}
