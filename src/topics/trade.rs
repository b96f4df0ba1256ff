use super::{TopicContent, case, chains, detail, metric, node, tier};
use crate::components::mind_map::{MapData, SizeTier::*};

/// Panel content for "Why Open a Trading Business?". The one panel whose
/// edges carry decorative arrowheads.
pub fn trade() -> TopicContent {
	let nodes = vec![
		// Market anchors, one per corner
		node("spot", "↗", "Spot Trading", 20.0, 20.0, Large, &["orderbook", "market", "limit"]),
		node("futures", "↘", "Futures", 80.0, 20.0, Large, &["leverage", "margin", "funding"]),
		node("options", "◎", "Options", 20.0, 80.0, Large, &["calls", "puts", "greeks"]),
		node("perpetual", "∞", "Perpetual", 80.0, 80.0, Large, &["funding", "leverage", "liquidation"]),
		// Spot branch
		node("orderbook", "≡", "Order Book", 10.0, 35.0, Medium, &["spot", "market", "limit"]),
		node("market", "▲", "Market Orders", 30.0, 35.0, Small, &["spot", "orderbook"]),
		node("limit", "◇", "Limit Orders", 20.0, 50.0, Small, &["spot", "orderbook"]),
		// Futures branch
		node("leverage", "×", "Leverage", 70.0, 35.0, Medium, &["futures", "perpetual", "margin"]),
		node("margin", "$", "Margin", 90.0, 35.0, Medium, &["futures", "leverage", "liquidation"]),
		node("funding", "%", "Funding Rate", 80.0, 50.0, Small, &["futures", "perpetual"]),
		// Options branch
		node("calls", "↑", "Call Options", 10.0, 65.0, Small, &["options", "greeks"]),
		node("puts", "↓", "Put Options", 30.0, 65.0, Small, &["options", "greeks"]),
		node("greeks", "Δ", "Greeks", 20.0, 95.0, Small, &["options", "calls", "puts"]),
		// Portfolio center
		node("liquidation", "!", "Liquidation", 90.0, 65.0, Medium, &["perpetual", "margin"]),
		node("portfolio", "◉", "Portfolio", 50.0, 50.0, Large, &["risk", "pnl", "analytics"]),
		node("risk", "◎", "Risk Mgmt", 40.0, 65.0, Medium, &["portfolio", "stop"]),
		node("pnl", "±", "P&L", 60.0, 65.0, Medium, &["portfolio", "analytics"]),
		node("analytics", "≈", "Analytics", 50.0, 35.0, Medium, &["portfolio", "pnl"]),
		node("stop", "⊘", "Stop Loss", 40.0, 80.0, Small, &["risk"]),
	];

	let details = vec![
		detail("spot", "Immediate cryptocurrency trading at current market prices", &[
			"Direct asset ownership",
			"Market and limit orders",
			"Real-time price execution",
		]),
		detail("futures", "Trade cryptocurrency contracts with leverage", &[
			"Leveraged positions",
			"Margin trading",
			"Settlement dates",
		]),
		detail("portfolio", "Comprehensive portfolio management and tracking", &[
			"Asset allocation",
			"Performance analytics",
			"Risk assessment",
		]),
		detail("analytics", "Advanced trading analytics and insights", &[
			"Technical indicators",
			"Market analysis",
			"Performance metrics",
		]),
	];

	TopicContent {
		heading: "Why Open a Trading Business?".into(),
		tagline: "Business will open a business account, trade crypto, get free tax profit and can get back loss as business expense".into(),
		diagram_title: "Trading Structure".into(),
		flow_title: "TRADING FLOW".into(),
		flow_steps: vec!["Analyze".into(), "Execute".into(), "Monitor".into(), "Optimize".into()],
		map: MapData { nodes, details, arrowheads: true },
		cases_title: "Trading Use Cases".into(),
		cases_tagline: "How businesses can leverage trading structures for growth".into(),
		cases: vec![
			case(
				"account",
				"Business Trading Account",
				"Open a dedicated business trading account to access institutional-grade trading tools and benefit from business tax advantages",
				&[
					"Institutional-grade trading platform access",
					"Lower trading fees and better spreads",
					"Advanced order types and execution",
					"Dedicated account manager support",
					"Business expense deductions for trading costs",
				],
			),
			case(
				"tax",
				"Tax-Free Profit",
				"Generate tax-free profits through strategic business trading structures and cryptocurrency tax advantages",
				&[
					"Long-term capital gains tax advantages",
					"Business expense deductions for trading tools",
					"Cryptocurrency tax optimization strategies",
					"Deferred tax structures for business growth",
					"International tax planning opportunities",
				],
			),
			case(
				"loss",
				"Loss Recovery",
				"Recover trading losses as business expenses and implement risk management strategies to protect your capital",
				&[
					"Deduct trading losses as business expenses",
					"Capital loss carryover for future tax years",
					"Risk management and stop-loss strategies",
					"Portfolio diversification techniques",
					"Professional trading education and tools",
				],
			),
		],
		metrics_title: "TRADING METRICS EXAMPLES".into(),
		metrics_note: "Real-world trading performance".into(),
		metrics: vec![
			metric("24h Volume", "$2.1B", "Trading volume", "+12%"),
			metric("Active Traders", "45K", "Business accounts", "+8%"),
			metric("Avg Profit", "23.4%", "Monthly return", "+5%"),
			metric("Tax Savings", "$89K", "Annual savings", "+15%"),
			metric("Loss Recovery", "67%", "Recovered losses", "+7%"),
			metric("Trading Pairs", "156", "Available pairs", "+3%"),
			metric("Execution Speed", "12ms", "Order execution", "-8%"),
			metric("Success Rate", "78%", "Profitable trades", "+4%"),
			metric("Risk Score", "2.3", "Portfolio risk", "-12%"),
			metric("ROI", "34.7%", "Annual return", "+9%"),
		],
		pricing_title: "Trading Opening Costs".into(),
		pricing_tagline: "Choose your trading package and start your business journey".into(),
		tiers: vec![
			tier("FREE", "Strategic Partner", "$0", &[
				"Basic trading account",
				"Standard trading tools",
				"Basic tax guidance",
				"Basic analytics",
				"Email support",
			], "Get Started", false),
			tier("1K", "Starter Trading", "$1,000", &[
				"Advanced trading tools",
				"Tax optimization strategies",
				"Risk management tools",
				"Advanced analytics",
				"Priority support",
			], "Choose Plan", false),
			tier("5K", "Professional Trading", "$5,000", &[
				"Full trading suite",
				"Custom tax strategies",
				"Automated trading bots",
				"Portfolio management",
				"24/7 support",
			], "Choose Plan", true),
			tier("20K", "Enterprise Trading", "$20,000", &[
				"White-label solution",
				"Custom trading algorithms",
				"Advanced integrations",
				"Dedicated manager",
				"SLA guarantee",
			], "Contact Sales", false),
		],
		tech_title: "Powered by Advanced Trading Technology".into(),
		tech_blurb: "Our trading solutions are built on cutting-edge blockchain technology, ensuring security, transparency, and scalability for your trading business.".into(),
		chains: chains(),
	}
}
