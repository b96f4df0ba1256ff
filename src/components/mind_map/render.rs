use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{EdgeEmphasis, MindMapState};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &MindMapState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	for &edge in state.edges() {
		let reveal = ease_out_cubic(state.edge_reveal(edge));
		if reveal <= 0.0 {
			continue;
		}

		let source = &state.nodes()[edge.source];
		let target = &state.nodes()[edge.target];
		let (x1, y1) = state.project(source);
		let (x2, y2) = state.project(target);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		// Three-tier visual contract: hovered endpoint wins, then selected,
		// then the faint dashed default.
		let (alpha, line_width, dashed) = match state.edge_emphasis(edge) {
			EdgeEmphasis::Highlighted => (0.6, 2.0, false),
			EdgeEmphasis::Selected => (0.4, 1.5, false),
			EdgeEmphasis::Base => (0.2, 1.0, true),
		};

		ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", alpha * reveal));
		ctx.set_line_width(line_width);
		if dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(5.0),
				&JsValue::from_f64(5.0),
			));
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		let arrow = if state.arrowheads { 8.0 } else { 0.0 };
		let (r1, r2) = (source.size.radius(), target.size.radius());
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow), y2 - uy * (r2 + arrow));
		ctx.stroke();

		if state.arrowheads {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
			ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", 0.3 * reveal));
			let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
			let (back_x, back_y) = (tip_x - ux * arrow, tip_y - uy * arrow);
			let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	for (idx, node) in state.nodes().iter().enumerate() {
		let reveal = ease_out_cubic(state.node_reveal(idx));
		if reveal <= 0.0 {
			continue;
		}

		let (x, y) = state.project(node);
		let emphasized = state.is_node_emphasized(idx);
		let scale = reveal * if emphasized { 1.1 } else { 1.0 };
		let radius = node.size.radius() * scale;

		ctx.set_global_alpha(reveal);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if emphasized { "#000000" } else { "#ffffff" });
		ctx.fill();
		ctx.set_stroke_style_str("#000000");
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(if emphasized { "#ffffff" } else { "#000000" });
		ctx.set_font(&format!("{}px sans-serif", (radius * 0.8).round()));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.glyph, x, y);

		// Label only surfaces while the node is hovered or selected.
		if emphasized {
			ctx.set_fill_style_str("#000000");
			ctx.set_font("bold 11px sans-serif");
			let _ = ctx.fill_text(&node.label, x, y + radius + 14.0);
		}

		if state.selected() == Some(idx) {
			let (sx, sy) = (x + radius * 0.75, y - radius * 0.75);
			ctx.begin_path();
			let _ = ctx.arc(sx, sy, 4.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str("#000000");
			ctx.fill();
			ctx.set_stroke_style_str("#ffffff");
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.set_global_alpha(1.0);
	}
	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
}
