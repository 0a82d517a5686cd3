use shared::gift_catalog::{Gift, GiftCatalog};
use shared::reveal::SPIN_DURATION_MS;
use shared::wheel_geometry::{
    sector_path, segment_color, slot_position, slot_radius, WHEEL_RADIUS,
};
use yew::prelude::*;

use crate::config::get_asset_url;

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub catalog: GiftCatalog,
    /// Rotation target in degrees; the browser transition animates the
    /// wheel toward it over the spin duration.
    pub rotation: f64,
    pub spinning: bool,
    pub landed: bool,
    pub winner: Option<Gift>,
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let count = props.catalog.len();
    let item_radius = slot_radius(count);

    // The deterministic transition carries the wheel to its final angle;
    // the rotation itself is set exactly once per session.
    let wheel_style = if props.rotation == 0.0 {
        "transform: rotate(0deg);".to_string()
    } else {
        format!(
            "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.25, 0.1, 0.25, 1.2);",
            props.rotation, SPIN_DURATION_MS
        )
    };

    // A losing wheel is blurred once it has landed, matching the muted
    // consolation framing.
    let lost = props.landed && props.winner.is_none();

    let sectors = props
        .catalog
        .gifts()
        .iter()
        .enumerate()
        .map(|(index, _)| {
            html! {
                <path
                    key={index}
                    d={sector_path(index, count, WHEEL_RADIUS)}
                    fill={segment_color(index, count)}
                    stroke="rgba(255, 255, 255, 0.6)"
                    stroke-width="0.3"
                />
            }
        })
        .collect::<Html>();

    let slots = props
        .catalog
        .gifts()
        .iter()
        .enumerate()
        .map(|(index, gift)| {
            let (x, y) = slot_position(index, count, WHEEL_RADIUS, item_radius);
            let dimmed = props
                .winner
                .as_ref()
                .map(|winner| winner.id != gift.id)
                .unwrap_or(false);
            let opacity = if dimmed { "0.3" } else { "1" };
            html! {
                <g key={index} transform={format!("translate({x:.4}, {y:.4})")} opacity={opacity}>
                    <circle r={item_radius.to_string()} fill="#fff" />
                    <image
                        href={get_asset_url(&gift.image)}
                        x={format!("{:.4}", -item_radius * 0.85)}
                        y={format!("{:.4}", -item_radius * 0.85)}
                        width={format!("{:.4}", item_radius * 1.7)}
                        height={format!("{:.4}", item_radius * 1.7)}
                    />
                </g>
            }
        })
        .collect::<Html>();

    html! {
        <div class="relative w-full max-w-sm mx-auto mb-8">
            // Continuous-rotation ring under the wheel marks the spinning
            // interval without touching the deterministic transition.
            if props.spinning {
                <div class="absolute inset-0 rounded-full border-4 border-dashed border-white/40 animate-spin pointer-events-none"></div>
            }
            <div class="rounded-full overflow-hidden bg-white/5 backdrop-blur-sm p-2 shadow-[0_0_40px_15px_rgba(255,255,255,0.2)]">
                <svg
                    class={classes!("w-full", "h-auto", lost.then_some("blur-[2px]"))}
                    viewBox="-50 -50 100 100"
                    style={wheel_style}
                >
                    { sectors }
                    { slots }
                    <circle r="2" fill="#fff" opacity="0.8" />
                </svg>
            </div>
            <div class="absolute top-0 left-1/2 -translate-x-1/2 -translate-y-1/2">
                <div class="bg-white rounded-full p-2 shadow-lg">
                    <span class={classes!(
                        "block", "text-rose-500", "font-bold", "leading-none",
                        if props.spinning { "animate-bounce" } else { "animate-pulse" }
                    )}>{"▼"}</span>
                </div>
            </div>
        </div>
    }
}
