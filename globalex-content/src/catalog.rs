//! Product catalog fixtures and the category filter.

use serde::Serialize;

/// Product families the catalog can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    BlackCharcoal,
    WhiteCharcoal,
    SawDustBriquettes,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::BlackCharcoal => "Black Charcoal",
            Category::WhiteCharcoal => "White Charcoal",
            Category::SawDustBriquettes => "Saw dust briquettes",
        }
    }
}

/// A catalog filter selection: either the `All Products` sentinel or one
/// concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    Category(Category),
}

impl ProductFilter {
    /// Filter chips in display order.
    pub const ALL_FILTERS: [ProductFilter; 4] = [
        ProductFilter::All,
        ProductFilter::Category(Category::BlackCharcoal),
        ProductFilter::Category(Category::WhiteCharcoal),
        ProductFilter::Category(Category::SawDustBriquettes),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductFilter::All => "All Products",
            ProductFilter::Category(category) => category.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub title: &'static str,
    pub tag: &'static str,
    pub featured: bool,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub packaging: &'static str,
    pub moq: &'static str,
}

/// The full export catalog shown on the Products section.
pub static CATALOG: [Product; 6] = [
    Product {
        title: "Premium Charcoal Briquettes",
        tag: "Briquettes",
        featured: true,
        category: Category::BlackCharcoal,
        image: "/assets/images/products/saw-dust-briquettes.jpeg",
        description: "High-density hexagonal briquettes with 4+ hour burn time",
        specs: &[
            "Moisture: < 5%",
            "Ash content: < 3%",
            "Calorific value: 7,500 kcal/kg",
        ],
        packaging: "10kg carton box, 50 boxes per pallet",
        moq: "1 container (20 tons)",
    },
    Product {
        title: "Natural Lump Charcoal",
        tag: "Lump",
        featured: true,
        category: Category::BlackCharcoal,
        image: "/assets/images/products/longan-black-charcoal.jpg",
        description: "Premium hardwood lump charcoal for high-heat grilling",
        specs: &["Moisture: < 6%", "Ash content: < 2%", "Burn time: 3-4 hours"],
        packaging: "5kg or 10kg kraft paper bags",
        moq: "500 kg",
    },
    Product {
        title: "Eco BBQ Briquettes",
        tag: "Eco",
        featured: false,
        category: Category::SawDustBriquettes,
        image: "/assets/images/products/saw-dust-briquettes.jpeg",
        description: "Sustainable coconut shell briquettes with minimal smoke",
        specs: &[
            "Moisture: < 7%",
            "Ash content: < 4%",
            "No chemical additives",
        ],
        packaging: "3kg retail box, 10kg bulk bag",
        moq: "200 kg",
    },
    Product {
        title: "Restaurant Grade Charcoal",
        tag: "Lump",
        featured: false,
        category: Category::BlackCharcoal,
        image: "/assets/images/products/eucalyptus-black-charcoal.jpg",
        description: "Extra-large lump charcoal for commercial kitchens",
        specs: &[
            "Moisture: < 5%",
            "Ash content: < 2.5%",
            "Average size: 15-20cm",
        ],
        packaging: "20kg kraft bags",
        moq: "1 ton",
    },
    Product {
        title: "Shisha Charcoal Cubes",
        tag: "Briquettes",
        featured: false,
        category: Category::SawDustBriquettes,
        image: "/assets/images/products/apricot-white-charcoal.jpg",
        description: "Quick-light coconut shell cubes for hookah lounges",
        specs: &[
            "Moisture: < 6%",
            "Ash content: < 5%",
            "Burn time: 60+ minutes",
        ],
        packaging: "1kg retail boxes",
        moq: "100 kg",
    },
    Product {
        title: "Hardwood Charcoal Chunks",
        tag: "Lump",
        featured: false,
        category: Category::BlackCharcoal,
        image: "/assets/images/products/eucalyptus-white-charcoal.jpeg",
        description: "Mixed hardwood charcoal for authentic BBQ flavor",
        specs: &[
            "Moisture: < 7%",
            "Fixed carbon: > 75%",
            "Burn time: 2-3 hours",
        ],
        packaging: "8kg bags, palletized",
        moq: "500 kg",
    },
];

/// Landing-page highlight cards. A separate fixture from the catalog, as
/// on the original site.
pub static FEATURED_PRODUCTS: [Product; 3] = [
    Product {
        title: "Natural Black Charcoal",
        tag: "Featured",
        featured: true,
        category: Category::BlackCharcoal,
        image: "/assets/images/products/eucalyptus-black-charcoal.jpg",
        description: "High-quality black charcoal with stable heat output",
        specs: &[
            "Moisture: < 8%",
            "Ash content: < 8%",
            "Calorific value: > 6500 kcal/kg",
        ],
        packaging: "According to customer requirements",
        moq: "1 container (~ 13 tons)",
    },
    Product {
        title: "White Charcoal",
        tag: "Featured",
        featured: true,
        category: Category::WhiteCharcoal,
        image: "/assets/images/products/orange-white-charcoal.jpg",
        description: "Premium grade white charcoal known for high heat and purity",
        specs: &[
            "Moisture: < 2%",
            "Ash content: < 2.5%",
            "Calorific value: > 7800 kcal/kg",
        ],
        packaging: "According to customer requirements",
        moq: "1 container (~ 13 tons)",
    },
    Product {
        title: "Saw Dust Briquettes Charcoal",
        tag: "Featured",
        featured: true,
        category: Category::SawDustBriquettes,
        image: "/assets/images/products/saw-dust-briquettes.jpeg",
        description: "High density briquettes with long burning time",
        specs: &[
            "Moisture: < 3%",
            "Ash content: < 3%",
            "Calorific value: > 7200 kcal/kg",
        ],
        packaging: "According to customer requirements",
        moq: "1 container (~ 13 tons)",
    },
];

/// Returns the catalog subset matching `filter`. The `All` sentinel
/// returns the full catalog in fixture order.
pub fn filter_products(filter: ProductFilter) -> Vec<&'static Product> {
    match filter {
        ProductFilter::All => CATALOG.iter().collect(),
        ProductFilter::Category(category) => CATALOG
            .iter()
            .filter(|product| product.category == category)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_returns_full_catalog() {
        let all = filter_products(ProductFilter::All);
        assert_eq!(all.len(), CATALOG.len());
    }

    #[test]
    fn filtered_results_are_a_subset_with_matching_category() {
        for filter in ProductFilter::ALL_FILTERS {
            let results = filter_products(filter);
            assert!(results.len() <= CATALOG.len());
            if let ProductFilter::Category(category) = filter {
                assert!(results.iter().all(|p| p.category == category));
            }
        }
    }

    #[test]
    fn category_counts_match_fixtures() {
        assert_eq!(
            filter_products(ProductFilter::Category(Category::BlackCharcoal)).len(),
            4
        );
        assert_eq!(
            filter_products(ProductFilter::Category(Category::SawDustBriquettes)).len(),
            2
        );
        // No white charcoal in the export catalog today; the filter still
        // exists because the landing page features one.
        assert!(filter_products(ProductFilter::Category(Category::WhiteCharcoal)).is_empty());
    }

    #[test]
    fn filter_labels_match_the_chips() {
        let labels: Vec<&str> = ProductFilter::ALL_FILTERS.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            [
                "All Products",
                "Black Charcoal",
                "White Charcoal",
                "Saw dust briquettes"
            ]
        );
    }

    #[test]
    fn featured_products_are_flagged() {
        assert!(FEATURED_PRODUCTS.iter().all(|p| p.featured));
        assert_eq!(FEATURED_PRODUCTS.len(), 3);
    }
}
