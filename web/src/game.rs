use crate::audio::AudioDeck;
use crate::leaderboard::{LeaderboardView, load_leaderboard};
use crate::utils::*;
use clap::Args;
use game::{Command, CommandOutcome, Cue, Direction, EngineState, TickOutcome};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::{Interval, Timeout};
use slither_core as game;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Key(Command),
    ToggleMute,
    NextPreset,
    NameInput(String),
    SaveScore,
    Celebrate(Cue),
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for food placement instead of random
    #[arg(short, long)]
    #[prop_or_default]
    seed: Option<u64>,
}

impl GameProps {
    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }
}

pub(crate) struct GameView {
    engine: game::PlayEngine,
    food: game::RandomFoodGenerator,
    leaderboard: game::Leaderboard,
    audio_settings: game::AudioSettings,
    deck: AudioDeck,
    player_name: String,
    save_pending: bool,
    celebration: Option<Timeout>,
    _tick_interval: Interval,
    _key_listener: EventListener,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>, millis: u32) -> Interval {
        let link = ctx.link().clone();
        Interval::new(millis, move || link.send_message(Msg::Tick))
    }

    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&gloo::utils::window(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };

            // typing a name must not steer or restart
            if event
                .target()
                .is_some_and(|target| target.has_type::<HtmlInputElement>())
            {
                return;
            }

            let key = event.key();
            let Some(command) = Command::from_key(&key) else {
                return;
            };
            log::trace!("key {:?}: {:?}", key, command);

            // arrows and space would scroll the page otherwise
            if !matches!(command, Command::Restart) {
                event.prevent_default();
            }
            link.send_message(Msg::Key(command));
        })
    }

    fn tick(&mut self, ctx: &Context<Self>) -> bool {
        let outcome = self.engine.tick(&mut self.food);

        if outcome == TickOutcome::Crashed {
            self.deck.stop_all();
        }
        if let Some(cue) = Cue::for_tick(outcome) {
            self.deck.play(cue);
        }
        if outcome == TickOutcome::Crashed {
            self.on_game_over(ctx);
        }

        outcome.has_update()
    }

    fn on_game_over(&mut self, ctx: &Context<Self>) {
        let score = self.engine.score();
        let cue = Cue::celebration(score, self.leaderboard.best());
        log::info!("game over, score {}, best {:?}", score, self.leaderboard.best());

        let link = ctx.link().clone();
        self.celebration = Some(Timeout::new(game::CELEBRATION_DELAY_MILLIS, move || {
            link.send_message(Msg::Celebrate(cue))
        }));
        self.save_pending = game::offers_save(score);
        self.player_name.clear();
    }

    fn apply_command(&mut self, command: Command) -> bool {
        let outcome = self.engine.apply(command, &mut self.food);
        log::debug!("{:?}: {:?}", command, outcome);

        if outcome == CommandOutcome::Started {
            self.deck.stop_all();
            self.celebration = None;
            self.save_pending = false;
            self.player_name.clear();
        }

        outcome.has_update()
    }

    fn save_score(&mut self) -> bool {
        let score = self.engine.score();
        if !self.save_pending || !game::can_save(score, &self.player_name) {
            return false;
        }

        let rank = self
            .leaderboard
            .insert(game::ScoreRecord::new(score, record_timestamp()));
        self.leaderboard.local_save();
        log::info!("saved score {} at rank {:?}", score, rank);

        self.save_pending = false;
        true
    }

    fn view_cell(&self, coords: game::Coord2) -> Html {
        if coords == self.engine.head() {
            let style = format!(
                "transform: rotate({}deg)",
                head_rotation(self.engine.direction())
            );
            html! { <td class="cell snake head" {style}/> }
        } else if self.engine.is_occupied(coords) {
            html! { <td class="cell snake"/> }
        } else if self.engine.food() == Some(coords) {
            html! { <td class="cell food"/> }
        } else {
            html! { <td class="cell"/> }
        }
    }

    fn view_status(&self) -> Html {
        match status_text(self.engine.state()) {
            Some((class, text)) => html! { <span class={classes!("status", class)}>{text}</span> },
            None => html! {},
        }
    }

    fn view_audio_controls(&self, ctx: &Context<Self>) -> Html {
        let muted = self.audio_settings.muted;
        let cb_mute = ctx.link().callback(|_: MouseEvent| Msg::ToggleMute);
        let cb_preset = ctx.link().callback(|_: MouseEvent| Msg::NextPreset);

        html! {
            <nav class="audio">
                <button class={classes!(muted.then_some("muted"))} onclick={cb_mute}>
                    {if muted { "🔇 Sound off" } else { "🔊 Sound on" }}
                </button>
                if !muted {
                    <button onclick={cb_preset}>
                        {format!("🎵 {}", self.audio_settings.preset().name)}
                    </button>
                }
            </nav>
        }
    }

    fn view_game_over(&self, ctx: &Context<Self>) -> Html {
        let score = self.engine.score();

        let actions = if self.save_pending {
            let oninput = ctx.link().callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::NameInput(input.value())
            });
            let onclick = ctx.link().callback(|_: MouseEvent| Msg::SaveScore);
            let disabled = !game::can_save(score, &self.player_name);
            let maxlength = game::NAME_MAX_CHARS.to_string();

            html! {
                <div class="save">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={self.player_name.clone()}
                        {maxlength}
                        {oninput}
                    />
                    <button {onclick} {disabled}>{"Save score"}</button>
                </div>
            }
        } else {
            let onclick = ctx.link().callback(|_: MouseEvent| Msg::Key(Command::Restart));
            html! { <button class="restart" {onclick}>{"Play again"}</button> }
        };

        html! {
            <Modal>
                <dialog class="game-over" open={true}>
                    <h2>{"Game over!"}</h2>
                    <p>{"Final score: "}<strong>{score.to_string()}</strong></p>
                    {actions}
                </dialog>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed().unwrap_or_else(js_random_seed);
        log::debug!("food seed: {}", seed);

        let config = game::GameConfig::classic();
        let audio_settings: game::AudioSettings = LocalOrDefault::local_or_default();

        Self {
            engine: game::PlayEngine::new(config),
            food: game::RandomFoodGenerator::new(seed),
            leaderboard: load_leaderboard(),
            deck: AudioDeck::new(&audio_settings),
            audio_settings,
            player_name: String::new(),
            save_pending: false,
            celebration: None,
            _tick_interval: GameView::create_timer(ctx, config.tick_millis),
            _key_listener: GameView::create_key_listener(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Tick => self.tick(ctx),
            Key(command) => self.apply_command(command),
            ToggleMute => {
                let muted = self.audio_settings.toggle_mute();
                self.deck.set_muted(muted);
                self.audio_settings.local_save();
                log::debug!("muted: {}", muted);
                true
            }
            NextPreset => {
                self.deck.stop_all();
                self.audio_settings.next_preset();
                self.deck = AudioDeck::new(&self.audio_settings);
                self.audio_settings.local_save();
                true
            }
            NameInput(name) => {
                let name = game::clamp_name(&name);
                if self.player_name != name {
                    self.player_name = name;
                    true
                } else {
                    false
                }
            }
            SaveScore => self.save_score(),
            Celebrate(cue) => {
                self.celebration = None;
                self.deck.play(cue);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (cols, rows) = self.engine.size();

        html! {
            <div class="slither">
                {self.view_audio_controls(ctx)}
                <header>
                    <output class="score">{self.engine.score().to_string()}</output>
                    {self.view_status()}
                </header>
                <table class="board">
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                { for (0..cols).map(|x| self.view_cell((x, y))) }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <kbd>{"↑ ↓ ← →"}</kbd>{" move "}
                    <kbd>{"Space"}</kbd>{" pause "}
                    <kbd>{"Enter"}</kbd>{" start"}
                </footer>
                <LeaderboardView leaderboard={self.leaderboard.clone()}/>
                if self.engine.is_over() {
                    {self.view_game_over(ctx)}
                }
            </div>
        }
    }
}

const fn head_rotation(direction: Direction) -> i16 {
    match direction {
        Direction::Up => -90,
        Direction::Down => 90,
        Direction::Left => 180,
        Direction::Right => 0,
    }
}

const fn status_text(state: EngineState) -> Option<(&'static str, &'static str)> {
    match state {
        EngineState::Ready => Some(("ready", "Press Enter to start")),
        EngineState::Playing => Some(("playing", "Playing")),
        EngineState::Paused => Some(("paused", "Paused, press Space to resume")),
        EngineState::Over => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_faces_the_direction_of_travel() {
        assert_eq!(head_rotation(Direction::Right), 0);
        assert_eq!(head_rotation(Direction::Up), -90);
        assert_eq!(head_rotation(Direction::Left), 180);
    }

    #[test]
    fn status_banner_hides_when_the_dialog_shows() {
        assert_eq!(status_text(EngineState::Over), None);
        assert_eq!(
            status_text(EngineState::Ready).map(|(class, _)| class),
            Some("ready")
        );
        assert_eq!(
            status_text(EngineState::Paused).map(|(class, _)| class),
            Some("paused")
        );
    }

    #[test]
    fn audio_settings_use_their_own_key() {
        assert_eq!(<game::AudioSettings as StorageKey>::KEY, "slither:audio");
    }
}
