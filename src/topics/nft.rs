use super::{TopicContent, case, chains, detail, metric, node, tier};
use crate::components::mind_map::{MapData, SizeTier::*};

/// Panel content for "Why Open an NFT Business?".
///
/// The dataset keeps the authored dangling "royalties" connection on
/// "digital-art"; the renderer drops that pair silently.
pub fn nft() -> TopicContent {
	let nodes = vec![
		// Business anchors, one per corner
		node("digital-art", "✦", "Digital Art", 15.0, 15.0, Large, &["creation", "marketplace", "royalties"]),
		node("digital-products", "■", "Digital Products", 85.0, 15.0, Large, &["utility", "licensing", "distribution"]),
		node("certification", "★", "Product Certification", 15.0, 85.0, Large, &["verification", "tracking", "authenticity"]),
		node("marketplace", "♦", "NFT Marketplace", 85.0, 85.0, Large, &["trading", "auctions", "collections"]),
		// Art branch
		node("creation", "✎", "Art Creation", 25.0, 30.0, Medium, &["digital-art", "minting"]),
		node("minting", "◆", "Minting", 35.0, 20.0, Small, &["creation", "metadata"]),
		node("metadata", "≡", "Metadata", 15.0, 35.0, Small, &["creation", "minting"]),
		// Product branch
		node("utility", "▲", "Utility NFTs", 75.0, 30.0, Medium, &["digital-products", "access"]),
		node("licensing", "§", "Licensing", 85.0, 35.0, Small, &["digital-products"]),
		node("distribution", "↗", "Distribution", 95.0, 25.0, Small, &["digital-products"]),
		node("access", "◎", "Access Rights", 75.0, 45.0, Small, &["utility"]),
		// Certification branch
		node("verification", "✓", "Verification", 25.0, 70.0, Medium, &["certification", "blockchain"]),
		node("tracking", "#", "Supply Chain", 15.0, 65.0, Small, &["certification"]),
		node("authenticity", "⊗", "Authenticity", 35.0, 80.0, Small, &["certification", "verification"]),
		node("blockchain", "∞", "Blockchain Proof", 25.0, 95.0, Small, &["verification"]),
		// Marketplace branch
		node("trading", "$", "Trading", 75.0, 70.0, Medium, &["marketplace", "pricing"]),
		node("auctions", "◉", "Auctions", 95.0, 75.0, Small, &["marketplace"]),
		node("collections", "◈", "Collections", 85.0, 95.0, Small, &["marketplace", "trading"]),
		node("pricing", "%", "Dynamic Pricing", 75.0, 95.0, Small, &["trading"]),
	];

	let details = vec![
		detail("digital-art", "Create, mint, and sell unique digital artworks with blockchain verification and royalty systems", &[
			"Global marketplace access",
			"Automatic royalty payments",
			"Blockchain authenticity",
		]),
		detail("digital-products", "Develop utility NFTs for digital products, software licenses, and access rights", &[
			"Software license management",
			"Access control systems",
			"Subscription automation",
		]),
		detail("certification", "Use NFTs to certify product authenticity, track supply chains, and verify ownership", &[
			"Supply chain tracking",
			"Authenticity verification",
			"Quality assurance",
		]),
		detail("marketplace", "Build or use NFT marketplaces for trading, auctions, and collection management", &[
			"Trading and auctions",
			"Collection management",
			"Dynamic pricing",
		]),
	];

	TopicContent {
		heading: "Why Open an NFT Business?".into(),
		tagline: "Business can create and sell digital art, digital products, and evolve the actual management process through NFT certification of products and prices".into(),
		diagram_title: "NFT Structure".into(),
		flow_title: "NFT CREATION FLOW".into(),
		flow_steps: vec!["Create".into(), "Mint".into(), "List".into(), "Trade".into()],
		map: MapData { nodes, details, arrowheads: false },
		cases_title: "NFT Use Cases".into(),
		cases_tagline: "How businesses can leverage NFTs for growth".into(),
		cases: vec![
			case(
				"art",
				"Digital Art Business",
				"Create, mint, and sell unique digital artworks with blockchain verification, automatic royalty systems, and global marketplace access",
				&[
					"Create and sell unique digital artworks globally",
					"Automatic royalty payments on every resale",
					"Blockchain authenticity verification",
					"Access to global NFT marketplaces",
					"Fractional ownership and investment opportunities",
				],
			),
			case(
				"products",
				"Digital Products",
				"Develop utility NFTs for digital products, software licenses, and access rights with smart contract automation and resale capabilities",
				&[
					"Software license management and automation",
					"Access control systems for premium content",
					"Subscription automation and billing",
					"Digital asset ownership and transfer",
					"Secondary market revenue from resales",
				],
			),
			case(
				"certification",
				"Product Certification",
				"Use NFTs to certify product authenticity, track supply chains, and verify ownership throughout the entire product lifecycle",
				&[
					"Complete supply chain tracking and transparency",
					"Authenticity verification and anti-counterfeiting",
					"Quality assurance and compliance reporting",
					"Ownership transfer and provenance history",
					"Enhanced customer trust and brand value",
				],
			),
		],
		metrics_title: "NFT METRICS EXAMPLES".into(),
		metrics_note: "Real-world NFT performance".into(),
		metrics: vec![
			metric("Floor Price", "3.2 ETH", "Collection floor", "+15%"),
			metric("Volume", "847 ETH", "24h trading", "+12%"),
			metric("Holders", "12.4K", "Unique owners", "+8%"),
			metric("Listed", "234", "1.9% supply", "+3%"),
			metric("Avg Sale", "4.7 ETH", "7d average", "+5%"),
			metric("Royalty", "7.5%", "Creator fee", "+2%"),
			metric("Mint Cost", "0.08 ETH", "Gas fee", "-8%"),
			metric("Market Cap", "2.1K ETH", "Total value", "+9%"),
			metric("Sales", "1.2K", "Total sold", "+7%"),
			metric("Revenue", "89 ETH", "Creator earnings", "+15%"),
		],
		pricing_title: "NFT Opening Costs".into(),
		pricing_tagline: "Choose your NFT package and start your digital journey".into(),
		tiers: vec![
			tier("FREE", "Strategic Partner", "$0", &[
				"Basic NFT minting",
				"Community support",
				"Documentation",
				"Basic analytics",
				"Email support",
			], "Get Started", false),
			tier("1K", "Starter NFT", "$1,000", &[
				"Custom NFT collection",
				"Smart contract deployment",
				"Basic marketplace integration",
				"Basic analytics",
				"30-day support",
			], "Choose Plan", false),
			tier("5K", "Professional NFT", "$5,000", &[
				"Advanced NFT features",
				"Custom marketplace",
				"Royalty automation",
				"Advanced analytics",
				"90-day support",
			], "Choose Plan", true),
			tier("20K", "Enterprise NFT", "$20,000", &[
				"Full NFT ecosystem",
				"Multi-chain support",
				"Custom development",
				"White-label solution",
				"1-year support",
			], "Contact Sales", false),
		],
		tech_title: "Powered by Advanced NFT Technology".into(),
		tech_blurb: "Our NFT solutions are built on cutting-edge blockchain technology, ensuring security, transparency, and scalability for your digital asset business.".into(),
		chains: chains(),
	}
}
