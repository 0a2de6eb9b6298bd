//! Pointer-reactive grid behind the hero. Purely cosmetic: points and cursor
//! position live in component state and every point's appearance is computed
//! during render, so nothing is mutated outside the framework's ownership.

use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects::{build_grid, point_appearance, settle_opacity, GridPoint};

#[function_component(GridGlow)]
pub fn grid_glow() -> Html {
    let container = use_node_ref();
    let points = use_state(Vec::<GridPoint>::new);
    let cursor = use_state(|| None::<(f64, f64)>);

    // Generate the grid once the container has a measured size. Regenerated
    // on every mount, dropped with the component.
    {
        let container = container.clone();
        let points = points.clone();
        use_effect_with((), move |_| {
            if let Some(element) = container.cast::<HtmlElement>() {
                let width = f64::from(element.offset_width());
                let height = f64::from(element.offset_height());
                points.set(build_grid(width, height, js_sys::Math::random));
            }
            || ()
        });
    }

    let onmousemove = {
        let container = container.clone();
        let cursor = cursor.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = container.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                cursor.set(Some((
                    f64::from(event.client_x()) - rect.left(),
                    f64::from(event.client_y()) - rect.top(),
                )));
            }
        })
    };

    let onmouseleave = {
        let cursor = cursor.clone();
        let points = points.clone();
        Callback::from(move |_| {
            cursor.set(None);
            // Points decay to a dim randomized rest instead of snapping back.
            let settled = points
                .iter()
                .map(|point| GridPoint {
                    rest_opacity: settle_opacity(js_sys::Math::random()),
                    ..point.clone()
                })
                .collect::<Vec<_>>();
            points.set(settled);
        })
    };

    let glow_style = match *cursor {
        Some((x, y)) => format!("left: {x:.1}px; top: {y:.1}px; opacity: 1;"),
        None => "opacity: 0;".to_string(),
    };

    html! {
        <div ref={container} class="grid-background" {onmousemove} {onmouseleave}>
            <div class="grid-points" aria-hidden="true">
                { for points.iter().map(|point| {
                    let (opacity, scale, blur) = point_appearance(point, *cursor);
                    let style = format!(
                        "left: {:.0}px; top: {:.0}px; opacity: {:.3}; transform: scale({:.3}); filter: blur({:.2}px);",
                        point.x, point.y, opacity, scale, blur
                    );
                    html! { <div class="grid-point" {style}></div> }
                }) }
            </div>
            <div class="grid-glow" style={glow_style} aria-hidden="true"></div>
        </div>
    }
}
