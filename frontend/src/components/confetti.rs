use yew::prelude::*;

const CONFETTI_CSS: &str = r#"
@keyframes confetti-fall {
    0% {
        transform: translateY(-10vh) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(110vh) rotate(720deg);
        opacity: 0.7;
    }
}

.confetti-piece {
    position: absolute;
    top: 0;
    width: 10px;
    height: 16px;
    animation-name: confetti-fall;
    animation-timing-function: ease-in;
    animation-iteration-count: infinite;
}
"#;

const PIECES: usize = 60;

/// Full-screen celebratory overlay. Purely cosmetic; visibility is
/// driven by the reveal session's celebration flag, which clears itself
/// after a fixed duration.
#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub active: bool,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    if !props.active {
        return html! {};
    }

    let pieces = (0..PIECES)
        .map(|i| {
            // Deterministic spread; nothing here affects the outcome.
            let left = (i * 61) % 100;
            let delay_ms = (i * 137) % 1500;
            let duration_ms = 2500 + (i * 211) % 2000;
            let hue = (i * 47) % 360;
            let style = format!(
                "left: {left}%; animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms; background: hsl({hue}, 85%, 60%);"
            );
            html! { <div key={i} class="confetti-piece" style={style}></div> }
        })
        .collect::<Html>();

    html! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden" style="z-index: 9999;">
            <style>{CONFETTI_CSS}</style>
            { pieces }
        </div>
    }
}
