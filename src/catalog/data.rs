//! Built-in portfolio content.
//!
//! Records are declared as `'static` tables and converted into owned
//! [`Project`] values when the catalog is built.

use super::{Kpi, Project};

/// Static form of a [`Project`].
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
    /// (label, value)
    pub kpis: &'static [(&'static str, &'static str)],
    pub categories: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

impl From<&ProjectRecord> for Project {
    fn from(r: &ProjectRecord) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Project {
            id: r.id.to_string(),
            title: r.title.to_string(),
            subtitle: r.subtitle.to_string(),
            date: r.date.to_string(),
            description: r.description.to_string(),
            highlights: owned(r.highlights),
            tags: owned(r.tags),
            kpis: r
                .kpis
                .iter()
                .map(|(label, value)| Kpi {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            categories: owned(r.categories),
            image: r.image.to_string(),
            link: r.link.to_string(),
        }
    }
}

/// Headline figure on the home page, animated from zero by a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub label: &'static str,
    pub target: u32,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { label: "Best Macro AUC", target: 93 },
    HeroStat { label: "Chatbot Resolution Rate", target: 85 },
    HeroStat { label: "Shipped Projects", target: 7 },
    HeroStat { label: "Analysis Domains", target: 4 },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "ai-factuality",
        title: "AI Factuality Detection",
        subtitle: "NLP · Weighted Ensemble · Data4Good Competition",
        date: "Nov 2025 - Jan 2026",
        description: "Weighted soft-voting ensemble combining HistGradientBoosting and Random Forest to detect factuality of AI-generated educational content.",
        highlights: &[
            "Achieved 0.9354 Macro-AUC using semantic similarity and dual-vectorization.",
            "Engineered Jaccard similarity, TF-IDF cosine similarity, and word ratio features.",
            "Built a scalable framework for factuality validation and quality assurance.",
        ],
        tags: &["NLP", "Ensemble", "Feature Engineering", "AUC 0.9354"],
        kpis: &[("Macro AUC", "0.9354"), ("CV Folds", "5"), ("Train Size", "21,021")],
        categories: &["ml", "nlp"],
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&w=900&q=80",
        link: "https://github.com/Debadri1999/AI-Factuality-Detection-ML",
    },
    ProjectRecord {
        id: "bankruptcy-system",
        title: "Bankruptcy Prediction System",
        subtitle: "Risk Modeling · Dual-Model Ensemble",
        date: "Oct 2025 - Dec 2025",
        description: "Production-ready bankruptcy risk engine using algorithm-specific feature engineering and 100-model ensemble.",
        highlights: &[
            "Final system reached 0.917 public AUC and 0.909 private AUC.",
            "Applied heavy/light feature engineering to LightGBM and XGBoost paths.",
            "Implemented 5-seed × 10-fold stratified CV for robust predictions.",
        ],
        tags: &["Risk", "LightGBM", "XGBoost", "AUC 0.917"],
        kpis: &[("Public AUC", "0.917"), ("Private AUC", "0.909"), ("Models", "100")],
        categories: &["ml"],
        image: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?auto=format&fit=crop&w=900&q=80",
        link: "https://github.com/Debadri1999/bankruptcy-prediction-system",
    },
    ProjectRecord {
        id: "computer-price",
        title: "Computer Price Dynamics Analysis",
        subtitle: "EDA · Hypothesis Testing",
        date: "Aug 2025 - Oct 2025",
        description: "Exploratory analysis of 100k computer systems to quantify how specs influence market valuation.",
        highlights: &[
            "Built tiered pricing models from hypothesis testing insights.",
            "Analyzed spec impact with Python (Pandas, NumPy) workflows.",
            "Translated analytics into product positioning strategies.",
        ],
        tags: &["EDA", "Hypothesis", "Python"],
        kpis: &[("Systems Analyzed", "100k+"), ("Features", "30+"), ("Hypotheses", "8")],
        categories: &["analytics"],
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=900&q=80",
        link: "https://github.com/Debadri1999/computer-price-analysis",
    },
    ProjectRecord {
        id: "accrual-anomaly",
        title: "Financial Portfolio Analysis",
        subtitle: "Accrual Anomaly Portfolio · Time-Series",
        date: "2025",
        description: "Empirical analysis of accrual anomaly using Kenneth French data, comparing low vs high accrual deciles across market cycles.",
        highlights: &[
            "Constructed 10 decile portfolios with equal- and value-weighted returns.",
            "Measured spread portfolio performance and recession vs expansion regimes.",
            "Confirmed low-accrual firms outperform high-accrual firms over 1963-2025.",
        ],
        tags: &["Portfolio", "Financial Markets", "Time-Series"],
        kpis: &[("Sample Years", "1963-2025"), ("Deciles", "10"), ("Weighting", "EW + VW")],
        categories: &["analytics"],
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?auto=format&fit=crop&w=900&q=80",
        link: "Accrual_Anamoly_Final_Project/Final%20Project/Accrual_Anomaly_Analysis_Report%20final.pdf",
    },
    ProjectRecord {
        id: "doubledo-gaming-chatbot",
        title: "AI Chatbot for Gaming Industry",
        subtitle: "Gaming Hardware Expert · Chatbase AI",
        date: "Dec 2025",
        description: "A 24/7 gaming hardware expert assistant that delivers build recommendations, compatibility checks, and deal alerts.",
        highlights: &[
            "Achieved an estimated 85%+ query resolution rate without human escalation.",
            "Translated technical specs into budget-aware recommendations.",
            "Designed FAQ coverage and quick actions for common customer needs.",
        ],
        tags: &["Conversational AI", "Chatbase", "Customer Support"],
        kpis: &[("Resolution Rate", "85%+"), ("Response Time", "<3s"), ("FAQ Coverage", "60+")],
        categories: &["automation"],
        image: "https://images.unsplash.com/photo-1542751371-adc38448a05e?auto=format&fit=crop&w=900&q=80",
        link: "Chatbot_Project/Doubledo_Gaming_AI_Chatbot_Report.pdf",
    },
    ProjectRecord {
        id: "nacho-nirvana-chatbot",
        title: "Food Delivery Chatbot",
        subtitle: "Chatfuel · Automated Ordering",
        date: "Dec 2025",
        description: "Facebook Messenger chatbot for nacho ordering with dynamic pricing, customization, and order confirmation.",
        highlights: &[
            "Built a 12-block conversational flow covering the full order journey.",
            "Implemented attribute-based pricing for size, toppings, drinks, and sides.",
            "Delivered menu navigation for classic vs loaded nacho categories.",
        ],
        tags: &["Chatbot", "Chatfuel", "Automation"],
        kpis: &[("Conversation Blocks", "12"), ("Dynamic Pricing", "Yes"), ("Order Flow", "End-to-End")],
        categories: &["automation"],
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=900&q=80",
        link: "Chatbot_Project/Nacho_Nirvana_Fixed_Chatbot_Report.pdf",
    },
    ProjectRecord {
        id: "gaming-laptop",
        title: "Web Crawling Market Analysis",
        subtitle: "Web Automation · Pricing Intelligence",
        date: "Nov 2026",
        description: "Web-crawled laptop listings to benchmark price-performance and track competitive market positioning.",
        highlights: &[
            "Automated capture of specs, price points, and availability signals.",
            "Compared configurations to surface best-value performance tiers.",
            "Built a clean dataset for downstream pricing analytics.",
        ],
        tags: &["Web Scraping", "Market Analysis", "Automation"],
        kpis: &[("Listings Captured", "2k+"), ("Pricing Tiers", "5"), ("Refresh Cadence", "Weekly")],
        categories: &["automation", "analytics"],
        image: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?auto=format&fit=crop&w=900&q=80",
        link: "Gaming_Laptop_Webscraping_Market_Analysis/",
    },
];
