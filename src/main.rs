//! Mini Arcade entry point
//!
//! Mounts whichever game the page's canvas asks for and runs the frame
//! loop. All simulation happens in fixed timesteps; raw browser events are
//! queued as commands and drained once per tick.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use mini_arcade::consts::*;
    use mini_arcade::renderer::{draw_breakout, draw_flappy};
    use mini_arcade::sim::{
        BreakoutState, Command, CommandQueue, FlappyState, GamePhase, GameSession, breakout,
        flappy,
    };
    use mini_arcade::{GameStats, Settings};

    /// Paddle pixels per arrow-key event
    const KEY_NUDGE: f32 = 24.0;

    /// Which game this page mounted
    enum ActiveGame {
        Breakout(BreakoutState),
        Flappy(FlappyState),
    }

    impl ActiveGame {
        fn from_name(name: &str, seed: u64) -> Self {
            match name {
                "flappy" => ActiveGame::Flappy(FlappyState::new(seed)),
                _ => ActiveGame::Breakout(BreakoutState::new()),
            }
        }

        /// Stats storage key for this game
        fn key(&self) -> &'static str {
            match self {
                ActiveGame::Breakout(_) => "breakout",
                ActiveGame::Flappy(_) => "flappy",
            }
        }

        fn size(&self) -> (u32, u32) {
            match self {
                ActiveGame::Breakout(_) => (BREAKOUT_WIDTH as u32, BREAKOUT_HEIGHT as u32),
                ActiveGame::Flappy(_) => (FLAPPY_WIDTH as u32, FLAPPY_HEIGHT as u32),
            }
        }

        fn session(&self) -> &GameSession {
            match self {
                ActiveGame::Breakout(s) => &s.session,
                ActiveGame::Flappy(s) => &s.session,
            }
        }

        fn tick(&mut self, commands: &[Command], dt: f32) {
            match self {
                ActiveGame::Breakout(s) => breakout::tick(s, commands, dt),
                ActiveGame::Flappy(s) => flappy::tick(s, commands, dt),
            }
        }

        fn draw(&self, ctx: &CanvasRenderingContext2d) {
            match self {
                ActiveGame::Breakout(s) => draw_breakout(ctx, s),
                ActiveGame::Flappy(s) => draw_flappy(ctx, s),
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        active: ActiveGame,
        queue: CommandQueue,
        ctx: CanvasRenderingContext2d,
        accumulator: f32,
        last_time: f64,
        stats: GameStats,
        settings: Settings,
        // Track phase so the stats commit fires once per game over
        last_phase: GamePhase,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(active: ActiveGame, ctx: CanvasRenderingContext2d) -> Self {
            let stats = GameStats::load(active.key());
            Self {
                active,
                queue: CommandQueue::new(),
                ctx,
                accumulator: 0.0,
                last_time: 0.0,
                stats,
                settings: Settings::load(),
                last_phase: GamePhase::Menu,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks for one frame
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            let mut first = true;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                // Commands go to the first substep only; later substeps in
                // the same frame see an empty queue
                let commands = if first { self.queue.drain() } else { Vec::new() };
                first = false;
                self.active.tick(&commands, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }

            // Commit stats once, on the transition into the result screen
            let phase = self.active.session().phase;
            if phase != self.last_phase {
                if phase == GamePhase::Result {
                    let score = self.active.session().score;
                    self.stats.record_game(score);
                    self.stats.save(self.active.key());
                    log::info!(
                        "Game over: score {score}, best {}, {} plays",
                        self.stats.high_score,
                        self.stats.games_played
                    );
                }
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.active.draw(&self.ctx);
        }

        /// Update HUD elements in the DOM, if the page has them
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let session = self.active.session();

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&session.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-best") {
                el.set_text_content(Some(&self.stats.high_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-plays") {
                el.set_text_content(Some(&self.stats.games_played.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }

        /// Map a discrete press (click/tap/space) to the phase it lands in
        fn press_command(&self) -> Command {
            match self.active.session().phase {
                GamePhase::Menu => Command::Start,
                GamePhase::Playing => Command::Flap,
                GamePhase::Result => Command::Restart,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mini Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The page tells us which game it wants
        let game_name = canvas
            .get_attribute("data-game")
            .unwrap_or_else(|| "breakout".to_string());
        let seed = js_sys::Date::now() as u64;
        let active = ActiveGame::from_name(&game_name, seed);

        let (w, h) = active.size();
        canvas.set_width(w);
        canvas.set_height(h);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(active, ctx)));
        log::info!("Mounted {game_name} (seed {seed})");

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(game.clone());

        // Paint the idle state once, then hand over to the frame loop
        game.borrow().render();
        request_animation_frame(game);

        log::info!("Mini Arcade running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move: continuous paddle target from the pointer x
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.queue.push(Command::PaddleTo(event.offset_x() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click: start / flap / restart depending on phase
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let cmd = g.press_command();
                g.queue.push(cmd);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: paddle target from the first touch point
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().queue.push(Command::PaddleTo(x));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: acts like a click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let cmd = g.press_command();
                g.queue.push(cmd);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        let cmd = g.press_command();
                        g.queue.push(cmd);
                    }
                    "Escape" | "p" | "P" => g.queue.push(Command::Pause),
                    "ArrowLeft" => g.queue.push(Command::Nudge(-KEY_NUDGE)),
                    "ArrowRight" => g.queue.push(Command::Nudge(KEY_NUDGE)),
                    "m" | "M" => g.queue.push(Command::Menu),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    let session = g.active.session();
                    if session.phase == GamePhase::Playing && !session.paused {
                        g.queue.push(Command::Pause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let session = g.active.session();
                if session.phase == GamePhase::Playing && !session.paused {
                    g.queue.push(Command::Pause);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mini_arcade::consts::SIM_DT;
    use mini_arcade::sim::{BreakoutState, Command, breakout};

    env_logger::init();
    log::info!("Mini Arcade (native) starting...");
    log::info!("Games are web pages - run with `trunk serve` for the browser version");

    // Headless smoke run: a few seconds of Breakout with the paddle parked
    let mut state = BreakoutState::new();
    breakout::tick(&mut state, &[Command::Start], SIM_DT);
    for _ in 0..600 {
        breakout::tick(&mut state, &[], SIM_DT);
    }
    println!(
        "smoke run: {} ticks, score {}, lives {}, {} bricks left",
        state.session.ticks,
        state.session.score,
        state.session.lives,
        state.bricks_remaining()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
