//! In-memory catalog filtering and pagination.

use serde::{Deserialize, Serialize};
use tagpress_core::{Outcome, Status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub inventory_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    fn any_price_in(&self, min: f64, max: f64) -> bool {
        self.variants
            .iter()
            .any(|v| v.price >= min && v.price <= max)
    }

    fn in_stock(&self) -> bool {
        self.variants.iter().any(|v| v.inventory_quantity > 0)
    }
}

/// Filter criteria; every field is optional and absent fields match
/// everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub status: Option<String>,
    pub published: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: bool,
}

/// Applies `criteria` to a product scope.
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_attr(&p.category, &criteria.category))
        .filter(|p| matches_attr(&p.vendor, &criteria.vendor))
        .filter(|p| matches_attr(&p.product_type, &criteria.product_type))
        .filter(|p| matches_attr(&p.status, &criteria.status))
        .filter(|p| criteria.published.is_none_or(|want| p.published == want))
        .filter(|p| {
            if criteria.min_price.is_none() && criteria.max_price.is_none() {
                return true;
            }
            p.any_price_in(
                criteria.min_price.unwrap_or(0.0),
                criteria.max_price.unwrap_or(f64::INFINITY),
            )
        })
        .filter(|p| !criteria.in_stock || p.in_stock())
        .collect()
}

fn matches_attr(value: &Option<String>, wanted: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.as_deref() == Some(wanted.as_str()),
    }
}

/// One page of results plus the bookkeeping callers display.
#[derive(Debug, Clone, Serialize)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

const MAX_PER_PAGE: usize = 250;

/// 1-based paginator over any slice. Out-of-range pages clamp to the last
/// page rather than erroring.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
        }
    }
}

impl Paginator {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    pub fn paginate<T: Clone>(&self, items: &[T]) -> Outcome<PageSlice<T>> {
        if self.per_page == 0 {
            return Outcome::error("per_page must be at least 1", Status::Unprocessable);
        }
        let per_page = self.per_page.min(MAX_PER_PAGE);
        let total = items.len();
        let total_pages = total.div_ceil(per_page).max(1);
        let page = self.page.clamp(1, total_pages);
        let start = (page - 1) * per_page;
        let slice: Vec<T> = items
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();
        Outcome::success(PageSlice {
            items: slice,
            page,
            per_page,
            total,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                title: "Mug".to_string(),
                category: Some("kitchen".to_string()),
                vendor: Some("acme".to_string()),
                product_type: None,
                status: Some("active".to_string()),
                published: true,
                variants: vec![Variant {
                    sku: "MUG-1".to_string(),
                    price: 8.0,
                    inventory_quantity: 3,
                }],
            },
            Product {
                title: "Poster".to_string(),
                category: Some("decor".to_string()),
                vendor: Some("acme".to_string()),
                product_type: None,
                status: Some("draft".to_string()),
                published: false,
                variants: vec![Variant {
                    sku: "POS-1".to_string(),
                    price: 20.0,
                    inventory_quantity: 0,
                }],
            },
        ]
    }

    #[test]
    fn filters_compose() {
        let products = catalog();
        let criteria = FilterCriteria {
            vendor: Some("acme".to_string()),
            published: Some(true),
            ..FilterCriteria::default()
        };
        let hits = filter(&products, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mug");
    }

    #[test]
    fn price_range_matches_any_variant() {
        let products = catalog();
        let criteria = FilterCriteria {
            min_price: Some(15.0),
            ..FilterCriteria::default()
        };
        let hits = filter(&products, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Poster");
    }

    #[test]
    fn in_stock_excludes_empty_variants() {
        let products = catalog();
        let criteria = FilterCriteria {
            in_stock: true,
            ..FilterCriteria::default()
        };
        let hits = filter(&products, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mug");
    }

    #[test]
    fn paginator_slices_and_reports_totals() {
        let items: Vec<u32> = (0..53).collect();
        let slice = Paginator::new(3, 10).paginate(&items).data.unwrap();
        assert_eq!(slice.items, (20..30).collect::<Vec<u32>>());
        assert_eq!(slice.total, 53);
        assert_eq!(slice.total_pages, 6);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let items: Vec<u32> = (0..5).collect();
        let slice = Paginator::new(99, 2).paginate(&items).data.unwrap();
        assert_eq!(slice.page, 3);
        assert_eq!(slice.items, vec![4]);
    }

    #[test]
    fn zero_per_page_is_rejected() {
        let outcome = Paginator::new(1, 0).paginate(&[1, 2, 3]);
        assert_eq!(outcome.status, Status::Unprocessable);
    }

    #[test]
    fn empty_scope_yields_one_empty_page() {
        let slice = Paginator::default().paginate(&Vec::<u32>::new()).data.unwrap();
        assert_eq!(slice.page, 1);
        assert!(slice.items.is_empty());
        assert_eq!(slice.total_pages, 1);
    }
}
