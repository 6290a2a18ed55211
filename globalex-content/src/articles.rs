//! Blog fixtures: article records and their pre-authored rich bodies.

use chrono::NaiveDate;

/// A block of pre-authored article body content. The blog detail view
/// renders these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(&'static str),
    Heading(&'static str),
    Bullets(&'static [&'static str]),
    /// A left-bordered feature block: title, intro line, bullet points and
    /// an italic footnote. `muted` renders with the grey border variant.
    Feature {
        title: &'static str,
        intro: &'static str,
        points: &'static [&'static str],
        note: &'static str,
        muted: bool,
    },
    Callout {
        title: &'static str,
        body: &'static str,
    },
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub featured: bool,
    pub image: &'static str,
    pub body: &'static [ContentBlock],
}

impl Article {
    /// Publication date parsed from the display string, e.g. "Jan 5, 2024".
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%b %d, %Y").ok()
    }
}

pub static ARTICLES: [Article; 5] = [
    Article {
        id: 1,
        title: "Guide to Choosing High-Quality Charcoal for Your Needs",
        summary: "Selecting good charcoal not only improves cooking efficiency but also ensures safety. Learn about wood types, hardness, moisture, and key indicators of premium charcoal.",
        category: "Buying Guide",
        date: "Jan 15, 2024",
        read_time: "8 min",
        featured: true,
        image: "/assets/images/blog/guide-choosing-high-quality-charcoal.png",
        body: &[
            ContentBlock::Paragraph(
                "Selecting good charcoal not only improves cooking or production efficiency but also helps save costs and ensures safety for users. Below are key criteria to consider when choosing high-quality charcoal.",
            ),
            ContentBlock::Heading("1. Choose the right wood type"),
            ContentBlock::Paragraph(
                "Charcoal made from hardwoods such as eucalyptus, cinnamon, coffee wood, or acacia tends to burn longer, produce less smoke, and generate higher heat. This makes it ideal for BBQ restaurants, pottery kilns, bakeries, or export businesses.",
            ),
            ContentBlock::Heading("2. Check hardness and weight"),
            ContentBlock::Paragraph(
                "Good charcoal has a solid surface, produces a clear “tanh” sound when tapped, and does not crumble easily. High-quality charcoal is lightweight but firm, indicating proper carbonization and low ash content.",
            ),
            ContentBlock::Heading("3. Moisture and ash levels"),
            ContentBlock::Paragraph(
                "Premium charcoal should be dry and free from mold. When burned, it should leave minimal ash, helping maintain stable heat and keep the workspace clean. You can break a piece to check for dryness and brittleness.",
            ),
            ContentBlock::Heading("4. Odor and smoke when testing"),
            ContentBlock::Paragraph(
                "High-quality charcoal should have almost no unusual smell. When lit, it should produce very little white smoke. Excessive smoke indicates impurities or incomplete carbonization.",
            ),
            ContentBlock::Heading("5. Clear origin and trusted suppliers"),
            ContentBlock::Paragraph(
                "Choose a reputable supplier with traceable wood sources and a standardized production process. This is especially important for export purposes or use in the F&B industry.",
            ),
        ],
    },
    Article {
        id: 2,
        title: "Charcoal Market Overview: Key Trends and Growth Opportunities",
        summary: "Explore the rapidly expanding global charcoal market, Vietnam's role as a key supplier, and the growing demand for green trends and biochar.",
        category: "Industry Insights",
        date: "Jan 10, 2024",
        read_time: "6 min",
        featured: true,
        image: "/assets/images/blog/charcoal-market-overview.png",
        body: &[
            ContentBlock::Paragraph(
                "The charcoal market is rapidly expanding as global demand rises in BBQ restaurants, F&B, bakeries, pottery kilns, and industries seeking cleaner fuel options. High-quality products such as charcoal, hardwood charcoal, and lump charcoal are preferred for their strong heat output, low smoke, and sustainability.",
            ),
            ContentBlock::Heading("1. Growing global demand"),
            ContentBlock::Paragraph(
                "Consumers in Japan, South Korea, Europe, and the Middle East are seeking reliable supplies of natural charcoal that meet environmental standards. This creates significant opportunities for Asian producers.",
            ),
            ContentBlock::Heading("2. Vietnam as a key supplier"),
            ContentBlock::Paragraph(
                "Thanks to abundant wood resources, competitive production costs, and an extensive coastline, Vietnam has become one of the leading exporters in the global charcoal market.",
            ),
            ContentBlock::Heading("3. Green trend and biochar growth"),
            ContentBlock::Paragraph(
                "The shift toward clean energy is driving demand for biochar, a by-product that improves soil health and reduces carbon emissions. This is one of the fastest-growing segments in the charcoal industry.",
            ),
            ContentBlock::Heading("4. Quality and certification challenges"),
            ContentBlock::Paragraph(
                "International buyers require traceable wood sources, clean production processes, and consistent quality. Companies that meet FSC standards and invest in modern technology will gain long-term competitive advantages.",
            ),
        ],
    },
    Article {
        id: 3,
        title: "Popular Types of Charcoal: A Complete Guide",
        summary: "From Lump Charcoal to Briquettes and White Charcoal—understand the different types, their benefits, and best applications for BBQ, industry, and agriculture.",
        category: "Product Guide",
        date: "Jan 5, 2024",
        read_time: "7 min",
        featured: false,
        image: "/assets/images/blog/popular-types-charcoal.png",
        body: &[
            ContentBlock::Paragraph(
                "The global charcoal market offers a wide range of products designed for cooking, industrial use, and sustainable agriculture. Each type of charcoal delivers different benefits in terms of heat output, burn time, smoke level, and environmental impact. Here is an overview of the most popular charcoal types used today.",
            ),
            ContentBlock::Feature {
                title: "1. Lump Charcoal (Natural Hardwood Charcoal)",
                intro: "Lump charcoal is made by carbonizing natural hardwoods such as eucalyptus, acacia, coffee wood, and cinnamon.",
                points: &[
                    "High heat output",
                    "Low smoke, natural aroma",
                    "Lights quickly and burns clean",
                    "Ideal for BBQ restaurants, grilling, bakeries, and pottery kilns",
                ],
                note: "It is the most widely used charcoal type worldwide.",
                muted: false,
            },
            ContentBlock::Feature {
                title: "2. Charcoal Briquettes",
                intro: "Charcoal briquettes are produced by compressing sawdust and wood residues and carbonizing them in modern kilns.",
                points: &[
                    "Uniform size and shape",
                    "Very long burn time",
                    "Low ash, clean, and consistent",
                    "Excellent for restaurants, commercial kitchens, and exports",
                ],
                note: "Briquettes are a top choice in international markets due to stability and efficiency.",
                muted: false,
            },
            ContentBlock::Feature {
                title: "3. White Charcoal",
                intro: "A premium charcoal made from dense hardwoods such as oak or old eucalyptus.",
                points: &[
                    "Extremely high heat",
                    "Very long burn duration",
                    "Almost no smoke and no sparks",
                    "Commonly used in Japanese and Korean BBQ, water filtration, and air purification",
                ],
                note: "Often called the “king of charcoal” because of its superior performance.",
                muted: false,
            },
            ContentBlock::Feature {
                title: "4. Biochar (Agricultural Charcoal)",
                intro: "Biochar is produced through pyrolysis and is increasingly used in sustainable farming.",
                points: &[
                    "Improves soil structure",
                    "Retains moisture and nutrients",
                    "Helps reduce greenhouse gases",
                    "Supports organic agriculture and carbon-negative farming",
                ],
                note: "Biochar is one of the fastest-growing categories in the charcoal industry.",
                muted: false,
            },
            ContentBlock::Feature {
                title: "5. Traditional Honeycomb Charcoal",
                intro: "Previously common for household cooking.",
                points: &["Low cost", "Easy to use"],
                note: "However, it produces more smoke and emissions, so it is now less popular.",
                muted: true,
            },
            ContentBlock::Heading("Conclusion"),
            ContentBlock::Paragraph(
                "From lump charcoal for BBQ, briquette charcoal for commercial kitchens, white charcoal for premium grilling, to biochar for sustainable agriculture — today’s charcoal market is diverse and evolving toward cleaner, greener solutions. Choosing the right charcoal depends on your intended use, quality expectations, and environmental goals.",
            ),
        ],
    },
    Article {
        id: 4,
        title: "Vietnam’s Forest Trees: Diversity and Natural Value",
        summary: "Discover the botanical diversity of Vietnam's forests, the economic value of key timber species, and their vital environmental importance.",
        category: "Nature & Ecology",
        date: "Dec 20, 2023",
        read_time: "5 min",
        featured: false,
        image: "/assets/images/blog/vietnam-forest-trees.png",
        body: &[
            ContentBlock::Paragraph(
                "Vietnam is one of the most botanically diverse countries in Southeast Asia. Thanks to its tropical climate and varied landscapes, the nation’s forests contain thousands of unique tree species, from valuable hardwoods to natural medicinal plants.",
            ),
            ContentBlock::Heading("1. Forest Diversity"),
            ContentBlock::Paragraph("Key forest types include:"),
            ContentBlock::Bullets(&[
                "Evergreen tropical forests: redwood, rosewood, black star.",
                "Mangrove forests: mangrove, nipa palm, and shoreline species that protect coastal areas.",
                "Bamboo forests: supplying raw materials for crafts and construction.",
                "High-altitude coniferous forests: pine and po mu.",
            ]),
            ContentBlock::Heading("2. Economic & Cultural Value"),
            ContentBlock::Paragraph(
                "Forest trees provide timber, medicinal herbs, and export materials such as acacia, cinnamon, star anise, and bamboo. Many species also play an important role in Vietnamese culture, such as the banyan tree and bodhi tree.",
            ),
            ContentBlock::Heading("3. Environmental Importance"),
            ContentBlock::Paragraph(
                "Trees help absorb CO₂, protect soil, maintain water sources, and support wildlife habitats—playing a key role in climate change mitigation.",
            ),
        ],
    },
    Article {
        id: 5,
        title: "Export Documentation Made Simple: Shipping Charcoal Internationally",
        summary: "Navigate customs requirements, phytosanitary certificates, and container specifications for smooth charcoal imports. A practical guide for first-time importers.",
        category: "Logistics",
        date: "Dec 15, 2023",
        read_time: "10 min",
        featured: false,
        image: "/assets/images/blog/export-documentation.png",
        body: &[
            ContentBlock::Paragraph(
                "Charcoal is classified as a dangerous good (DG) in many shipping contexts due to its flammability (spontaneous combustion risk). Therefore, exporting charcoal requires precise documentation and adherence to international maritime safety standards (IMDG Code). Below is the essential checklist for importers and exporters.",
            ),
            ContentBlock::Image {
                src: "/assets/images/blog/shipping-containers-port.jpg",
                alt: "Shipping Containers at Port",
            },
            ContentBlock::Heading("1. Commercial Invoice & Packing List"),
            ContentBlock::Paragraph(
                "These are the foundational documents for any trade. The Commercial Invoice details the value and description of goods, while the Packing List specifies the net/gross weight, number of bags, and pallet configuration. Precision here prevents customs delays at the destination port.",
            ),
            ContentBlock::Heading("2. Material Safety Data Sheet (MSDS)"),
            ContentBlock::Paragraph(
                "This is critical for charcoal. The MSDS proves that the charcoal has been tested for self-heating properties. Shipping lines require this to accept the booking. It confirms whether the charcoal is classified as Class 4.2 (Spontaneously Combustible) or non-hazardous.",
            ),
            ContentBlock::Heading("3. Bill of Lading (B/L)"),
            ContentBlock::Paragraph(
                "The legal contract of carriage. For charcoal, it’s vital to ensure the HS Code (usually 4402) is correct and the description matches the MSDS exactly.",
            ),
            ContentBlock::Heading("4. Certificate of Origin (C/O)"),
            ContentBlock::Paragraph(
                "Issued by the Vietnamese Chamber of Commerce or government bodies. This document certifies the goods originate in Vietnam, which can be crucial for claiming tax exemptions under Free Trade Agreements (FTAs) like EVFTA (Europe) or VJEPA (Japan).",
            ),
            ContentBlock::Callout {
                title: "Pro Tip: Vanning Certificate",
                body: "Some strict ports require a \"Vanning Certificate\" or \"Survey Report\" issued by a third party (like SGS) to prove the temperature of the charcoal was safe at the time of loading into the container.",
            },
            ContentBlock::Heading("5. Phytosanitary Certificate"),
            ContentBlock::Paragraph(
                "Since charcoal is a wood product, this certificate confirms the shipment has been treated and is free from pests/insects. This is mandatory for entry into most countries to protect their local ecosystem.",
            ),
        ],
    },
];

/// Articles for the featured tier, in fixture order.
pub fn featured_articles() -> Vec<&'static Article> {
    ARTICLES.iter().filter(|a| a.featured).collect()
}

/// Articles for the recent tier, newest first.
pub fn recent_articles() -> Vec<&'static Article> {
    let mut recent: Vec<&'static Article> = ARTICLES.iter().filter(|a| !a.featured).collect();
    recent.sort_by_key(|a| std::cmp::Reverse(a.published()));
    recent
}

pub fn article_by_id(id: u32) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

/// Blog view state: which article's detail is open, if any. Holds the id
/// and resolves through the fixture table, so an unknown id degrades to
/// the list view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlogSelection {
    selected: Option<u32>,
}

impl BlogSelection {
    pub fn article(&self) -> Option<&'static Article> {
        self.selected.and_then(article_by_id)
    }

    pub fn open(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn back(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_ids_are_unique() {
        let mut ids: Vec<u32> = ARTICLES.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ARTICLES.len());
    }

    #[test]
    fn tiers_partition_the_fixtures() {
        let featured = featured_articles();
        let recent = recent_articles();
        assert_eq!(featured.len(), 2);
        assert_eq!(recent.len(), 3);
        assert_eq!(featured.len() + recent.len(), ARTICLES.len());
    }

    #[test]
    fn dates_parse_and_recent_tier_is_newest_first() {
        for article in &ARTICLES {
            assert!(article.published().is_some(), "unparseable date {:?}", article.date);
        }
        let recent = recent_articles();
        for pair in recent.windows(2) {
            assert!(pair[0].published() >= pair[1].published());
        }
        assert_eq!(recent[0].id, 3);
    }

    #[test]
    fn every_article_has_a_body() {
        assert!(ARTICLES.iter().all(|a| !a.body.is_empty()));
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let article = article_by_id(4).unwrap();
        assert_eq!(article.category, "Nature & Ecology");
        assert!(article_by_id(99).is_none());
    }

    #[test]
    fn selection_round_trips_between_list_and_detail() {
        let mut selection = BlogSelection::default();
        assert!(selection.article().is_none());

        selection.open(3);
        assert_eq!(selection.article().map(|a| a.id), Some(3));

        selection.back();
        assert!(selection.article().is_none());

        // Opening again after going back behaves the same.
        selection.open(1);
        assert_eq!(selection.article().map(|a| a.id), Some(1));
    }

    #[test]
    fn selecting_an_unknown_id_falls_back_to_the_list() {
        let mut selection = BlogSelection::default();
        selection.open(99);
        assert!(selection.article().is_none());
    }
}
