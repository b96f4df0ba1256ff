use super::{TopicContent, case, chains, detail, metric, node, tier};
use crate::components::mind_map::{MapData, SizeTier::*};

/// Panel content for "Why Open a DeFi Business?". The only panel without a
/// process flow strip.
pub fn defi() -> TopicContent {
	let nodes = vec![
		// Protocol anchors
		node("lending", "$", "Lending", 25.0, 15.0, Large, &["collateral", "interest", "liquidation"]),
		node("dex", "⇅", "DEX", 75.0, 15.0, Large, &["amm", "liquidity", "fees"]),
		// Lending branch
		node("collateral", "■", "Collateral", 15.0, 35.0, Medium, &["lending", "liquidation"]),
		node("interest", "%", "Interest", 35.0, 35.0, Small, &["lending", "yield"]),
		node("liquidation", "↘", "Liquidation", 25.0, 55.0, Small, &["lending", "collateral"]),
		// Exchange branch
		node("amm", "◆", "AMM", 85.0, 35.0, Medium, &["dex", "liquidity"]),
		node("liquidity", "≈", "Liquidity", 65.0, 35.0, Medium, &["dex", "amm", "yield", "fees"]),
		node("fees", "¢", "Fees", 75.0, 55.0, Small, &["dex", "liquidity"]),
		// Yield cluster
		node("yield", "↗", "Yield Farming", 50.0, 25.0, Large, &["interest", "liquidity", "staking", "rewards"]),
		node("staking", "⊗", "Staking", 40.0, 45.0, Medium, &["yield", "rewards"]),
		node("rewards", "★", "Rewards", 60.0, 45.0, Medium, &["yield", "staking"]),
		// Derivatives corner
		node("derivatives", "◇", "Derivatives", 20.0, 75.0, Medium, &["options", "futures"]),
		node("options", "△", "Options", 10.0, 85.0, Small, &["derivatives"]),
		node("futures", "▽", "Futures", 30.0, 85.0, Small, &["derivatives"]),
		// Insurance corner
		node("insurance", "◉", "Insurance", 80.0, 75.0, Medium, &["risk", "coverage"]),
		node("risk", "!", "Risk Mgmt", 70.0, 85.0, Small, &["insurance"]),
		node("coverage", "⊕", "Coverage", 90.0, 85.0, Small, &["insurance"]),
	];

	let details = vec![
		detail("lending", "Decentralized lending protocols for businesses", &[
			"Business account integration",
			"Collateral management",
			"Interest rate optimization",
		]),
		detail("dex", "Decentralized exchange for trading", &[
			"Automated market making",
			"Liquidity provision",
			"Fee optimization",
		]),
		detail("staking", "Staking pools for passive income", &[
			"Pool creation and management",
			"Reward distribution",
			"Risk management",
		]),
		detail("yield", "Yield farming strategies", &[
			"Multi-protocol farming",
			"Automated strategies",
			"Risk-adjusted returns",
		]),
	];

	TopicContent {
		heading: "Why Open a DeFi Business?".into(),
		tagline: "Business will open a business account and trade, create staking pool and create a crypto reserve".into(),
		diagram_title: "DeFi Structure".into(),
		flow_title: String::new(),
		flow_steps: vec![],
		map: MapData { nodes, details, arrowheads: false },
		cases_title: "DeFi Use Cases".into(),
		cases_tagline: "How businesses can leverage DeFi protocols for growth".into(),
		cases: vec![
			case(
				"wallet",
				"Decentralized Business Wallet",
				"Open a decentralized business wallet and trade with prelaunch coins and launchpad opportunities for maximum growth potential",
				&[
					"Access to prelaunch coins and early opportunities",
					"Launchpad integration for new projects",
					"Multi-signature wallet management",
					"Advanced trading tools and analytics",
					"Integration with existing business systems",
				],
			),
			case(
				"staking",
				"Staking Pool",
				"Create staking pools to generate passive income while providing liquidity to the DeFi ecosystem",
				&[
					"Generate consistent passive income",
					"Support network security and governance",
					"Diversify revenue streams",
					"Access to governance tokens",
					"Automated reward distribution",
				],
			),
			case(
				"reserve",
				"Crypto Reserve",
				"Create a crypto reserve to hedge against inflation and diversify your business treasury with digital assets",
				&[
					"Hedge against traditional market volatility",
					"Diversify treasury holdings",
					"Access to yield-generating protocols",
					"Global liquidity and accessibility",
					"Future-proof financial strategy",
				],
			),
		],
		metrics_title: "DEFI METRICS EXAMPLES".into(),
		metrics_note: "Real-world DeFi performance".into(),
		metrics: vec![
			metric("TVL", "$127M", "Total locked", "+18%"),
			metric("APY", "24.7%", "Average yield", "+5%"),
			metric("Volume", "$45M", "24h trading", "+12%"),
			metric("Users", "89K", "Active wallets", "+8%"),
			metric("Pools", "156", "Liquidity pairs", "+3%"),
			metric("Protocols", "23", "Integrated", "+2%"),
			metric("Fees", "$2.1M", "Monthly revenue", "+15%"),
			metric("Staking", "67%", "Pool utilization", "+7%"),
			metric("Lending", "$89M", "Total borrowed", "+9%"),
			metric("Insurance", "$12M", "Coverage value", "+4%"),
		],
		pricing_title: "DeFi Opening Costs".into(),
		pricing_tagline: "Choose your DeFi package and start your decentralized journey".into(),
		tiers: vec![
			tier("FREE", "Strategic Partner", "$0", &[
				"Basic DeFi integration",
				"Simple trading tools",
				"Basic staking setup",
				"Basic analytics",
				"Email support",
			], "Get Started", false),
			tier("1K", "Starter DeFi", "$1,000", &[
				"Advanced trading tools",
				"Multi-pool staking",
				"Yield optimization",
				"Advanced analytics",
				"Priority support",
			], "Choose Plan", false),
			tier("5K", "Professional DeFi", "$5,000", &[
				"Full DeFi suite",
				"Custom staking pools",
				"Automated strategies",
				"Risk management",
				"24/7 support",
			], "Choose Plan", true),
			tier("20K", "Enterprise DeFi", "$20,000", &[
				"White-label solution",
				"Custom protocol development",
				"Advanced integrations",
				"Dedicated manager",
				"SLA guarantee",
			], "Contact Sales", false),
		],
		tech_title: "Powered by Advanced DeFi Technology".into(),
		tech_blurb: "Our DeFi solutions are built on cutting-edge blockchain technology, ensuring security, transparency, and scalability for your decentralized finance operations.".into(),
		chains: chains(),
	}
}
