//! サイト各セクションの固定コンテンツ定義。
//!
//! 実行時に生成・破棄されることはなく、描画側から参照されるだけの
//! 静的カタログ。

/// 技術セクションの探査レイヤー1件分。
pub struct TechLayer {
    /// レイヤー名。
    pub title: &'static str,
    /// 深度帯のラベル。
    pub depth: &'static str,
    /// 説明文。
    pub description: &'static str,
    /// 一覧表示用の短いグリフ。
    pub glyph: &'static str,
}

/// 技術セクションに表示する5つのレイヤー。
pub const TECH_LAYERS: [TechLayer; 5] = [
    TechLayer {
        title: "Satellite Array",
        depth: "Space",
        description: "Advanced satellite constellation equipped with AMRT sensors orbiting Earth",
        glyph: "[SAT]",
    },
    TechLayer {
        title: "Signal Processing",
        depth: "Atmospheric",
        description: "AI-powered algorithms analyze atomic resonance frequencies in real-time",
        glyph: "[SIG]",
    },
    TechLayer {
        title: "Surface Analysis",
        depth: "0 - 500 ft",
        description: "Surface-level mineral identification and geological mapping",
        glyph: "[MAP]",
    },
    TechLayer {
        title: "Deep Detection",
        depth: "500 - 5,000 ft",
        description: "Detection of precious metals, rare earth elements, and mineral deposits",
        glyph: "[GEM]",
    },
    TechLayer {
        title: "Hydrocarbon Layer",
        depth: "5,000 - 18,000 ft",
        description: "Oil and gas deposit identification with precise depth mapping",
        glyph: "[OIL]",
    },
];

/// レイヤーごとの探知レンジ表示。最深層のみ18,000ftまで。
pub fn layer_detection_range(layer_idx: usize) -> &'static str {
    if layer_idx == 4 {
        "Up to 18,000 ft"
    } else {
        "Up to 5,000 ft"
    }
}

/// 能力セクションのカード1件分。
pub struct Capability {
    pub title: &'static str,
    pub range: &'static str,
    pub accuracy: &'static str,
    pub description: &'static str,
    pub applications: &'static [&'static str],
    pub glyph: &'static str,
}

/// 能力セクションに表示する6枚のカード。
pub const CAPABILITIES: [Capability; 6] = [
    Capability {
        title: "Hydrocarbon Detection",
        range: "Up to 18,000 feet",
        accuracy: "93%+",
        description: "Locate oil and gas deposits without drilling or seismic surveys",
        applications: &["Oil Exploration", "Natural Gas Fields", "Unconventional Reserves"],
        glyph: "[OIL]",
    },
    Capability {
        title: "Precious Metals",
        range: "Up to 5,000 feet",
        accuracy: "93%+",
        description: "Detect gold, silver, platinum, and rare earth elements",
        applications: &["Gold Mining", "Silver Deposits", "Rare Earth Elements"],
        glyph: "[GEM]",
    },
    Capability {
        title: "Base Metals & Minerals",
        range: "Up to 5,000 feet",
        accuracy: "93%+",
        description: "Identify copper, lithium, iron ore, and industrial minerals",
        applications: &["Copper Mining", "Lithium Extraction", "Industrial Minerals"],
        glyph: "[ORE]",
    },
    Capability {
        title: "Underground Voids",
        range: "Up to 5,000 feet",
        accuracy: "95%+",
        description: "Detect caves, tunnels, and archaeological sites",
        applications: &["Archaeological Surveys", "Structural Assessment", "Security Applications"],
        glyph: "[CAV]",
    },
    Capability {
        title: "Water Resources",
        range: "Up to 3,000 feet",
        accuracy: "90%+",
        description: "Locate underground aquifers and water tables",
        applications: &["Well Drilling", "Water Management", "Agricultural Planning"],
        glyph: "[H2O]",
    },
    Capability {
        title: "Environmental Monitoring",
        range: "Surface to 1,000 feet",
        accuracy: "95%+",
        description: "Track contamination and environmental changes",
        applications: &["Pollution Monitoring", "Remediation Planning", "Environmental Assessment"],
        glyph: "[ENV]",
    },
];

/// 用途セクションのタブ1件分。
pub struct Application {
    pub title: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub case_study: &'static str,
    pub depth: &'static str,
    pub accuracy: &'static str,
}

/// 用途セクションの4タブ。
pub const APPLICATIONS: [Application; 4] = [
    Application {
        title: "Oil & Gas Exploration",
        industry: "Energy",
        description: "Revolutionary approach to hydrocarbon exploration without environmental disruption",
        benefits: &[
            "No seismic surveys required",
            "Zero environmental impact",
            "Faster exploration timelines",
            "Reduced exploration costs by 60%",
        ],
        case_study: "Identified major oil reserve in Texas, saving $15M in traditional exploration costs",
        depth: "18,000 feet",
        accuracy: "93%",
    },
    Application {
        title: "Mining Exploration",
        industry: "Mining",
        description: "Precision mineral detection for sustainable mining operations",
        benefits: &[
            "Precise deposit mapping",
            "Minimize environmental impact",
            "Optimize drilling programs",
            "Reduce exploration risk",
        ],
        case_study: "Located gold deposits in Nevada with 95% accuracy, confirmed by subsequent drilling",
        depth: "5,000 feet",
        accuracy: "93%",
    },
    Application {
        title: "Archaeological Discovery",
        industry: "Research",
        description: "Non-invasive archaeological surveying for historical preservation",
        benefits: &[
            "Preserve site integrity",
            "Map underground structures",
            "Identify artifact locations",
            "Historical documentation",
        ],
        case_study: "Located undisturbed burial chambers in the Philippines ahead of a documentary expedition",
        depth: "500 feet",
        accuracy: "95%",
    },
    Application {
        title: "Water Resource Management",
        industry: "Agriculture",
        description: "Sustainable water resource identification and management",
        benefits: &[
            "Locate underground aquifers",
            "Optimize well placement",
            "Water table monitoring",
            "Drought planning",
        ],
        case_study: "Helped California farms identify new water sources during drought conditions",
        depth: "3,000 feet",
        accuracy: "90%",
    },
];

/// ヒーローセクションの主要統計（値, ラベル）。
pub const HERO_STATS: [(&str, &str); 3] = [
    ("93%", "Accuracy Rate"),
    ("18,000", "Feet Deep"),
    ("20+", "Years Experience"),
];

/// 結果セクションの統計（値, ラベル）。
pub const RESULT_STATS: [(&str, &str); 4] = [
    ("93%+", "Average Accuracy"),
    ("500+", "Surveys Completed"),
    ("20+", "Years Experience"),
    ("Zero", "Environmental Impact"),
];

/// 結果セクションの検証手法カード。
pub struct ValidationMethod {
    pub title: &'static str,
    pub description: &'static str,
}

/// 3種類の検証手法。
pub const VALIDATION_METHODS: [ValidationMethod; 3] = [
    ValidationMethod {
        title: "Drilling Verification",
        description: "Direct validation through drilling programs confirms predictions with 93%+ accuracy across multiple geological formations",
    },
    ValidationMethod {
        title: "Third-Party Validation",
        description: "Independent geological firms and government agencies have verified the technology through blind studies and comparative analysis",
    },
    ValidationMethod {
        title: "Historical Success",
        description: "Successfully located historical treasure sites in the Philippines as featured in a televised documentary series",
    },
];

/// 調査プロセスの4ステップ。
pub const SURVEY_PROCESS: [&str; 4] = [
    "Satellite positioning and target area mapping",
    "AMRT signal transmission and data collection",
    "AI-powered analysis and mineral identification",
    "Detailed report with depth and location data",
];

/// 問い合わせセクションの「What to Expect」ステップ（見出し, 補足）。
pub const EXPECT_STEPS: [(&str, &str); 3] = [
    ("Initial Consultation", "Review project goals and target areas"),
    ("Satellite Survey", "AMRT data collection and analysis"),
    ("Detailed Report", "Comprehensive analysis with depth mapping"),
];

/// 調査の成果物リスト。
pub const DELIVERABLES: [&str; 5] = [
    "High-resolution subsurface maps",
    "Mineral composition analysis",
    "Depth and location coordinates",
    "Recommended exploration points",
    "Technical consultation support",
];

/// プロジェクト種別の選択肢。フォームのprojectTypeへ循環的に設定される。
pub const PROJECT_TYPES: [&str; 6] = [
    "Oil & Gas Exploration",
    "Mining Exploration",
    "Water Resources",
    "Archaeological Survey",
    "Environmental Assessment",
    "Other",
];

/// フッターのサービスリンク一覧。
pub const FOOTER_SERVICES: [&str; 5] = [
    "Oil & Gas Exploration",
    "Mining Surveys",
    "Water Resource Mapping",
    "Archaeological Surveys",
    "Environmental Assessment",
];

/// フッターの技術リンク一覧。
pub const FOOTER_TECHNOLOGY: [&str; 5] = [
    "AMRT Technology",
    "Satellite Capabilities",
    "AI Analysis",
    "Technical Specifications",
    "Validation Studies",
];
