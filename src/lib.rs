pub mod board;
pub mod catalog;
pub mod storage;

use board::{Board, Gesture, SLOT_COUNT};
use catalog::{Conference, Division, Team};
use storage::{LocalStore, StoredPlacement, Theme};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{DragEvent, Event, HtmlImageElement, HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

const FALLBACK_LOGO: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='28'%3E%3Ctext y='22' font-size='20'%3E%F0%9F%8F%88%3C/text%3E%3C/svg%3E";

fn logo_src(team: &Team) -> String {
    format!("assets/teamlogos/{}.png", team.slug)
}

fn bar_src(team: &Team) -> String {
    format!("assets/teamrankingbars/{}_ranking.png", team.slug)
}

#[function_component(App)]
fn app() -> Html {
    let board = use_state(|| {
        storage::load_placement(&LocalStore)
            .map(|record| Board::from_slots(&record.0))
            .unwrap_or_default()
    });
    let gesture = use_state(Gesture::default);
    let filter = use_state(String::new);
    let theme = use_state(|| storage::load_theme(&LocalStore));

    {
        let theme = *theme;
        use_effect_with_deps(
            move |mode: &Theme| {
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let _ = body.set_attribute("data-theme", mode.as_str());
                }
                || ()
            },
            theme,
        );
    }

    let on_pool_drag_start = {
        let board = board.clone();
        let gesture = gesture.clone();
        Callback::from(move |(event, team_id): (DragEvent, &'static str)| {
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data("text/plain", team_id);
                transfer.set_effect_allowed("move");
            }
            gesture.set(Gesture::from_pool(&board, team_id).unwrap_or_default());
        })
    };

    let on_slot_drag_start = {
        let board = board.clone();
        let gesture = gesture.clone();
        Callback::from(move |(event, slot): (DragEvent, usize)| {
            let Some(next) = Gesture::from_slot(&board, slot) else {
                gesture.set(Gesture::Idle);
                return;
            };
            if let Some(transfer) = event.data_transfer() {
                if let Some(team_id) = next.team() {
                    let _ = transfer.set_data("text/plain", team_id);
                }
                transfer.set_effect_allowed("move");
            }
            gesture.set(next);
        })
    };

    // Accepting the drop target is all that happens here; state only moves
    // on the drop itself.
    let on_drag_over = Callback::from(|event: DragEvent| {
        event.prevent_default();
        if let Some(transfer) = event.data_transfer() {
            transfer.set_drop_effect("move");
        }
    });

    let on_drop = {
        let board = board.clone();
        let gesture = gesture.clone();
        Callback::from(move |(event, target): (DragEvent, usize)| {
            event.prevent_default();
            let mut next = (*board).clone();
            if next.apply_drop(*gesture, target) {
                storage::save_placement(&LocalStore, &StoredPlacement(next.to_stored()));
                board.set(next);
            }
            gesture.set(Gesture::Idle);
        })
    };

    let on_remove = {
        let board = board.clone();
        Callback::from(move |(event, slot): (MouseEvent, usize)| {
            event.stop_propagation();
            let mut next = (*board).clone();
            next.remove(slot);
            storage::save_placement(&LocalStore, &StoredPlacement(next.to_stored()));
            board.set(next);
        })
    };

    let on_clear = {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_placement(&LocalStore);
            board.set(Board::new());
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            filter.set(input.value());
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            storage::save_theme(&LocalStore, next);
            theme.set(next);
        })
    };

    let needle = catalog::normalize_query(&filter);
    let theme_class = match *theme {
        Theme::Dark => "theme-dark",
        Theme::Light => "theme-light",
    };

    html! {
        <div class={classes!("app", theme_class)}>
            { render_pool(&board, &filter, &needle, &on_filter, &on_clear, &on_pool_drag_start) }
            <main class="board-pane">
                { render_header(*theme, &on_toggle_theme) }
                <div class="board-grid">
                    { for (0..SLOT_COUNT).map(|slot| render_slot(
                        &board,
                        slot,
                        &on_slot_drag_start,
                        &on_drag_over,
                        &on_drop,
                        &on_remove,
                    )) }
                </div>
            </main>
        </div>
    }
}

fn render_header(theme: Theme, on_toggle_theme: &Callback<MouseEvent>) -> Html {
    let icon = match theme {
        Theme::Dark => "☀",
        Theme::Light => "🌙",
    };
    html! {
        <header class="board-header">
            <div>
                <h1>{ "NFL Power Rankings" }</h1>
                <p class="board-subtitle">{ "Drag and drop teams to build your rankings" }</p>
            </div>
            <button class="theme-toggle" onclick={on_toggle_theme.clone()} aria-label="Toggle theme">
                { icon }
            </button>
        </header>
    }
}

fn render_pool(
    board: &Board,
    filter_text: &str,
    needle: &str,
    on_filter: &Callback<InputEvent>,
    on_clear: &Callback<MouseEvent>,
    on_drag_start: &Callback<(DragEvent, &'static str)>,
) -> Html {
    html! {
        <aside class="pool">
            <div class="pool-header">
                <div class="pool-header-row">
                    <h2>{ "Team Pool" }</h2>
                    <button class="clear-all" onclick={on_clear.clone()}>{ "Clear All" }</button>
                </div>
                <input
                    class="pool-search"
                    type="search"
                    placeholder="Search teams..."
                    value={filter_text.to_string()}
                    oninput={on_filter.clone()}
                />
            </div>
            <div class="pool-columns">
                { for Conference::ALL.iter().map(|conference| {
                    render_conference(*conference, board, needle, on_drag_start)
                }) }
            </div>
        </aside>
    }
}

fn render_conference(
    conference: Conference,
    board: &Board,
    needle: &str,
    on_drag_start: &Callback<(DragEvent, &'static str)>,
) -> Html {
    html! {
        <div class={classes!("conference", conference.css_class())} key={conference.label()}>
            <h2 class="conference-title">{ conference.label() }</h2>
            { for conference.divisions().iter().map(|division| {
                render_division(*division, board, needle, on_drag_start)
            }) }
        </div>
    }
}

fn render_division(
    division: Division,
    board: &Board,
    needle: &str,
    on_drag_start: &Callback<(DragEvent, &'static str)>,
) -> Html {
    let visible: Vec<&'static Team> = catalog::teams_in(division)
        .filter(|team| team.matches(needle))
        .collect();
    // Fully filtered-out divisions disappear rather than render empty.
    if visible.is_empty() {
        return html! {};
    }
    html! {
        <section class="division" key={division.title()}>
            <h3 class="division-title">{ division.region() }</h3>
            <div class="division-teams">
                { for visible.into_iter().map(|team| {
                    render_pool_card(team, board.is_placed(team.id), on_drag_start)
                }) }
            </div>
        </section>
    }
}

fn render_pool_card(
    team: &'static Team,
    used: bool,
    on_drag_start: &Callback<(DragEvent, &'static str)>,
) -> Html {
    let ondragstart = {
        let on_drag_start = on_drag_start.clone();
        Callback::from(move |event: DragEvent| on_drag_start.emit((event, team.id)))
    };
    html! {
        <div
            key={team.id}
            class={classes!("pool-card", used.then_some("placed"))}
            draggable={if used { "false" } else { "true" }}
            ondragstart={ondragstart}
        >
            <img
                class="pool-logo"
                src={logo_src(team)}
                alt={team.name}
                onerror={logo_fallback()}
            />
            <span class="pool-name">{ team.name }</span>
        </div>
    }
}

fn render_slot(
    board: &Board,
    slot: usize,
    on_slot_drag_start: &Callback<(DragEvent, usize)>,
    on_drag_over: &Callback<DragEvent>,
    on_drop: &Callback<(DragEvent, usize)>,
    on_remove: &Callback<(MouseEvent, usize)>,
) -> Html {
    let occupant = board.occupant(slot).and_then(catalog::team_by_id);
    let ondrop = {
        let on_drop = on_drop.clone();
        Callback::from(move |event: DragEvent| on_drop.emit((event, slot)))
    };

    let content = match occupant {
        Some(team) => {
            let ondragstart = {
                let on_slot_drag_start = on_slot_drag_start.clone();
                Callback::from(move |event: DragEvent| on_slot_drag_start.emit((event, slot)))
            };
            let onremove = {
                let on_remove = on_remove.clone();
                Callback::from(move |event: MouseEvent| on_remove.emit((event, slot)))
            };
            html! {
                <div class="slot-team" draggable="true" ondragstart={ondragstart}>
                    <img class="slot-bar" src={bar_src(team)} alt="" onerror={bar_fallback()} />
                    <div class="slot-overlay">
                        <img
                            class="slot-logo"
                            src={logo_src(team)}
                            alt={team.name}
                            onerror={logo_fallback()}
                        />
                        <span class="slot-name">{ team.short_name.unwrap_or(team.name) }</span>
                        <button class="slot-remove" onclick={onremove} aria-label="Remove">
                            { "×" }
                        </button>
                    </div>
                </div>
            }
        }
        None => html! {
            <div class="slot-empty">{ "Drop team here" }</div>
        },
    };

    html! {
        <div class="slot-row" key={slot.to_string()}>
            <div class="slot-rank">{ (slot + 1).to_string() }</div>
            <div class="slot-drop" ondragover={on_drag_over.clone()} ondrop={ondrop}>
                { content }
            </div>
        </div>
    }
}

fn logo_fallback() -> Callback<Event> {
    Callback::from(|event: Event| {
        let Some(image) = event.target_dyn_into::<HtmlImageElement>() else {
            return;
        };
        if image.src().starts_with("data:") {
            return;
        }
        image.set_src(FALLBACK_LOGO);
    })
}

fn bar_fallback() -> Callback<Event> {
    Callback::from(|event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            let _ = image.style().set_property("display", "none");
        }
    })
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
