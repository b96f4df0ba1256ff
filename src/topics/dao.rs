use super::{TopicContent, case, chains, detail, metric, node, tier};
use crate::components::mind_map::{MapData, SizeTier::*};

/// Panel content for "Why Open a DAO?".
pub fn dao() -> TopicContent {
	let nodes = vec![
		// Core governance layer
		node("governance", "⚖", "Governance", 50.0, 20.0, Large, &["proposals", "voting", "treasury"]),
		// Proposal system
		node("proposals", "≡", "Proposals", 20.0, 35.0, Medium, &["governance", "community", "voting"]),
		node("voting", "✓", "Voting", 80.0, 35.0, Medium, &["governance", "token", "execution"]),
		// Community layer
		node("community", "◉", "Community", 15.0, 60.0, Large, &["proposals", "treasury", "delegates"]),
		node("delegates", "◎", "Delegates", 35.0, 75.0, Small, &["community", "voting"]),
		// Treasury management
		node("treasury", "■", "Treasury", 50.0, 80.0, Large, &["governance", "community", "token", "multisig"]),
		node("multisig", "⊗", "Multi-Sig", 70.0, 70.0, Small, &["treasury", "execution"]),
		// Token economics
		node("token", "$", "Token", 85.0, 60.0, Large, &["voting", "treasury", "rewards"]),
		node("rewards", "★", "Rewards", 90.0, 45.0, Small, &["token", "execution"]),
		// Execution layer
		node("execution", "▲", "Execution", 65.0, 50.0, Medium, &["voting", "multisig", "rewards"]),
	];

	let details = vec![
		detail("governance", "Core decision-making system for the DAO", &[
			"Proposal creation and management",
			"Voting mechanisms",
			"Execution protocols",
		]),
		detail("treasury", "Financial management and asset control", &[
			"Multi-signature wallet",
			"Budget allocation",
			"Investment decisions",
		]),
		detail("community", "Member engagement and participation", &[
			"Member onboarding",
			"Discussion forums",
			"Reputation system",
		]),
		detail("token", "Token economics and distribution", &[
			"Voting power allocation",
			"Reward mechanisms",
			"Token utility",
		]),
	];

	TopicContent {
		heading: "Why Open a DAO?".into(),
		tagline: "As business you can improve every aspect efficiently and increase your profit".into(),
		diagram_title: "DAO Structure".into(),
		flow_title: "GOVERNANCE FLOW".into(),
		flow_steps: vec!["Propose".into(), "Discuss".into(), "Vote".into(), "Execute".into()],
		map: MapData { nodes, details, arrowheads: false },
		cases_title: "DAO Use Cases".into(),
		cases_tagline: "How businesses can leverage DAO structure for growth".into(),
		cases: vec![
			case(
				"community",
				"Community",
				"A business can evolve customers to community giving value to feedback and offer more detailed products",
				&[
					"Transform customers into engaged community members",
					"Collect valuable feedback for product development",
					"Create detailed, personalized product offerings",
					"Build brand loyalty through community engagement",
					"Enable peer-to-peer support and knowledge sharing",
				],
			),
			case(
				"token",
				"Token",
				"A business can create a token and use it as rewards for customers giving the best possible fidelity program",
				&[
					"Create custom loyalty tokens for customer rewards",
					"Implement the most effective fidelity program",
					"Enable token-based voting on business decisions",
					"Provide exclusive access to premium features",
					"Create a self-sustaining reward ecosystem",
				],
			),
			case(
				"digital",
				"Digital Product",
				"Through the community and the token any business can start selling digital products with utility or for collection opening a new market",
				&[
					"Launch utility-based digital products",
					"Create collectible digital assets (NFTs)",
					"Open new revenue streams and markets",
					"Leverage community for product validation",
					"Use tokens for exclusive product access",
				],
			),
		],
		metrics_title: "DAO METRICS EXAMPLES".into(),
		metrics_note: "Real-world DAO performance".into(),
		metrics: vec![
			metric("Active Proposals", "23", "Pending votes", "+12%"),
			metric("Token Holders", "15.2K", "Voting members", "+8%"),
			metric("Treasury Value", "$4.7M", "Total assets", "+15%"),
			metric("Participation", "67%", "Voter turnout", "+5%"),
			metric("Proposals Passed", "89%", "Success rate", "+2%"),
			metric("Delegates", "127", "Active delegates", "+3%"),
			metric("Quorum", "45%", "Required threshold", "0%"),
			metric("Voting Power", "2.3M", "Total tokens", "+7%"),
			metric("Execution Time", "2.1d", "Avg execution", "-15%"),
			metric("Gas Fees", "$12K", "Monthly cost", "-8%"),
		],
		pricing_title: "DAO Opening Costs".into(),
		pricing_tagline: "Choose your DAO package and start your decentralized journey".into(),
		tiers: vec![
			tier("FREE", "Strategic Partner", "$0", &[
				"Basic DAO setup",
				"Community governance",
				"Token creation",
				"Basic analytics",
				"Email support",
			], "Get Started", false),
			tier("1K", "Starter DAO", "$1,000", &[
				"Advanced governance",
				"Multi-sig wallet",
				"Custom tokenomics",
				"Advanced analytics",
				"Priority support",
			], "Choose Plan", false),
			tier("5K", "Professional DAO", "$5,000", &[
				"Full governance suite",
				"Treasury management",
				"NFT integration",
				"Custom branding",
				"24/7 support",
			], "Choose Plan", true),
			tier("20K", "Enterprise DAO", "$20,000", &[
				"White-label solution",
				"Custom development",
				"Advanced integrations",
				"Dedicated manager",
				"SLA guarantee",
			], "Contact Sales", false),
		],
		tech_title: "Powered by Advanced Crypto Technology".into(),
		tech_blurb: "Our DAO solutions are built on cutting-edge blockchain technology, ensuring security, transparency, and scalability for your decentralized organization.".into(),
		chains: chains(),
	}
}
