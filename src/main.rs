//! Tic Tac Cube entry point
//!
//! Handles platform-specific initialization: wires browser pointer/touch
//! input into the game controller and mirrors game events into the DOM.
//! The 3D scene itself is drawn by the page's render layer; this shell
//! owns input, status text, and save/resume.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use tic_tac_cube::camera::ViewCamera;
    use tic_tac_cube::controller::{GameController, Viewport};
    use tic_tac_cube::game::{EventSink, Game, GameEvent, Player};

    const SAVE_KEY: &str = "tic_tac_cube_save";

    /// Shell state shared by the event closures
    struct Shell {
        controller: GameController,
        camera: ViewCamera,
        viewport: Viewport,
    }

    impl Shell {
        fn new(viewport: Viewport) -> Self {
            Self {
                controller: GameController::new(),
                camera: ViewCamera::new(viewport.width / viewport.height),
                viewport,
            }
        }

        fn set_viewport(&mut self, width: f32, height: f32) {
            self.viewport = Viewport::new(width, height);
            self.camera.set_aspect(width / height);
        }
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn element_by_id(id: &str) -> Option<HtmlElement> {
        document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Mirrors game events into the status line and winner overlay
    struct StatusPanel;

    impl StatusPanel {
        fn set_status(player: Player) {
            if let Some(el) = element_by_id("status") {
                el.set_text_content(Some(&format!("Current Player: {player}")));
                let color = match player {
                    Player::X => "#ff0000",
                    Player::O => "#0000ff",
                };
                let _ = el.style().set_property("color", color);
            }
        }

        fn show_overlay(text: &str, color: &str) {
            if let Some(el) = element_by_id("winner-overlay") {
                el.set_text_content(Some(text));
                let _ = el.style().set_property("color", color);
                let _ = el.set_attribute("class", "");
            }
        }

        fn hide_overlay() {
            if let Some(el) = element_by_id("winner-overlay") {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    impl EventSink for StatusPanel {
        fn on_event(&mut self, event: &GameEvent) {
            match event {
                GameEvent::MarkerPlaced { cell, player } => {
                    log::info!("{player} claimed cell {cell}");
                }
                GameEvent::TurnChanged { next } => Self::set_status(*next),
                GameEvent::Won { player } => {
                    log::info!("player {player} wins");
                    let color = match player {
                        Player::X => "#ff6666",
                        Player::O => "#6666ff",
                    };
                    Self::show_overlay(&format!("Player {player} Wins!"), color);
                }
                GameEvent::Draw => {
                    log::info!("game drawn");
                    Self::show_overlay("It's a Draw!", "#ffffff");
                }
                GameEvent::Reset => {
                    Self::hide_overlay();
                    Self::set_status(Player::X);
                }
            }
        }
    }

    /// Save the game to LocalStorage
    fn save_game(game: &Game) {
        if let Ok(json) = serde_json::to_string(game) {
            if let Some(storage) = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
            {
                let _ = storage.set_item(SAVE_KEY, &json);
                log::debug!("game saved at move {}", game.moves());
            }
        }
    }

    /// Load a saved game from LocalStorage
    fn load_saved_game() -> Option<Game> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(SAVE_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    /// Clear any saved game from LocalStorage
    fn clear_saved_game() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(SAVE_KEY);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tic Tac Cube starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.client_width() as f32;
        let height = canvas.client_height() as f32;
        let shell = Rc::new(RefCell::new(Shell::new(Viewport::new(width, height))));

        // Resume an unfinished game if one was saved
        if let Some(saved) = load_saved_game() {
            if saved.is_over() {
                clear_saved_game();
            } else {
                log::info!("resuming saved game at move {}", saved.moves());
                shell.borrow_mut().controller = GameController::with_game(saved);
            }
        }

        {
            let mut s = shell.borrow_mut();
            s.controller.subscribe(Box::new(StatusPanel));
            StatusPanel::set_status(s.controller.game().current_player());
        }

        setup_input_handlers(&canvas, shell.clone());
        setup_play_again(shell.clone());
        setup_resize(canvas, shell);

        log::info!("Tic Tac Cube running!");
    }

    /// Pointer position relative to the canvas
    fn canvas_pos(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
        let rect = canvas.get_bounding_client_rect();
        (
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();

        // Mouse down - start tracking a potential selection (left button only)
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let (x, y) = canvas_pos(&canvas, event.client_x(), event.client_y());
                shell
                    .borrow_mut()
                    .controller
                    .pointer_pressed(x, y, js_sys::Date::now());
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - feed the gesture tracker, publish the hovered cell
        // on the canvas for the render layer to highlight
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = canvas_pos(&canvas, event.client_x(), event.client_y());
                let mut guard = shell.borrow_mut();
                let state = &mut *guard;
                state.controller.pointer_moved(x, y);
                match state.controller.hover_probe(x, y, &state.camera, state.viewport) {
                    Some(cell) => {
                        let _ = canvas.set_attribute(
                            "data-hover-cell",
                            &format!("{},{},{}", cell.x, cell.y, cell.z),
                        );
                    }
                    None => {
                        let _ = canvas.remove_attribute("data-hover-cell");
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - quick stationary clicks place a marker
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let (x, y) = canvas_pos(&canvas, event.client_x(), event.client_y());
                let mut guard = shell.borrow_mut();
                let state = &mut *guard;
                let placed = state.controller.pointer_released(
                    x,
                    y,
                    js_sys::Date::now(),
                    &state.camera,
                    state.viewport,
                );
                if placed.is_some() {
                    if state.controller.game().is_over() {
                        clear_saved_game();
                    } else {
                        save_game(state.controller.game());
                    }
                }
            });
            let _ =
                window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = canvas_pos(&canvas, touch.client_x(), touch.client_y());
                    shell
                        .borrow_mut()
                        .controller
                        .pointer_pressed(x, y, js_sys::Date::now());
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = canvas_pos(&canvas, touch.client_x(), touch.client_y());
                    shell.borrow_mut().controller.pointer_moved(x, y);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - quick stationary taps place a marker
        {
            let shell = shell.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let (x, y) = canvas_pos(&canvas, touch.client_x(), touch.client_y());
                    let mut guard = shell.borrow_mut();
                    let state = &mut *guard;
                    let placed = state.controller.pointer_released(
                        x,
                        y,
                        js_sys::Date::now(),
                        &state.camera,
                        state.viewport,
                    );
                    if placed.is_some() {
                        if state.controller.game().is_over() {
                            clear_saved_game();
                        } else {
                            save_game(state.controller.game());
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_again(shell: Rc<RefCell<Shell>>) {
        if let Some(btn) = element_by_id("play-again-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                shell.borrow_mut().controller.reset();
                clear_saved_game();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = canvas.client_width() as f32;
            let height = canvas.client_height() as f32;
            shell.borrow_mut().set_viewport(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_shell::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tic Tac Cube (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning picking self-check...");
    self_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn self_check() {
    use glam::Vec2;
    use tic_tac_cube::camera::ViewCamera;
    use tic_tac_cube::picking::{CellResolver, RayCaster};

    let camera = ViewCamera::new(16.0 / 9.0);
    let resolver = CellResolver::new();
    let cell = resolver
        .resolve(&camera.screen_ray(Vec2::ZERO))
        .expect("center ray must hit the board");
    assert_eq!((cell.x, cell.y, cell.z), (1, 1, 1));
    println!("✓ Center ray resolves to the middle cell");
}
