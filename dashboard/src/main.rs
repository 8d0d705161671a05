use client::ApiClient;
use firecore::polling::PollPolicy;
use iced::widget::{button, column, row, text, Container};
use iced::{time, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

mod chrome;
mod client;
mod livemap;
mod map_canvas;
mod predict;

const BACKEND_URL: &str = "http://127.0.0.1:9000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const FADE_TICK: Duration = Duration::from_millis(30);

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Dashboard::boot, Dashboard::update, Dashboard::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Dashboard) -> String {
    "Wildfire Watch".into()
}

fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}

fn application_subscription(state: &Dashboard) -> Subscription<Message> {
    let mut subscriptions = Vec::new();
    if state.screen == Screen::LiveMap {
        subscriptions.push(
            time::every(state.live.poll_delay()).map(|_| Message::Live(livemap::Event::Tick)),
        );
    }
    if state.chrome.is_fading() {
        subscriptions.push(time::every(FADE_TICK).map(|_| Message::Chrome(chrome::Event::FadeTick)));
    }
    Subscription::batch(subscriptions)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Predict,
    LiveMap,
}

#[derive(Debug, Clone)]
enum Message {
    Chrome(chrome::Event),
    Predict(predict::Event),
    Live(livemap::Event),
    NavigateHome,
}

struct Dashboard {
    screen: Screen,
    client: ApiClient,
    chrome: chrome::Landing,
    predict: predict::PredictController,
    live: livemap::LiveFeed,
}

impl Dashboard {
    fn boot() -> (Self, Task<Message>) {
        (
            Dashboard {
                screen: Screen::Landing,
                client: ApiClient::new(BACKEND_URL, REQUEST_TIMEOUT),
                chrome: chrome::Landing::new(),
                predict: predict::PredictController::new(),
                live: livemap::LiveFeed::new(PollPolicy::default()),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Chrome(chrome::Event::ModeChosen(mode)) => {
                state.chrome.dismiss_overlay();
                match mode {
                    chrome::Mode::Predict => {
                        state.screen = Screen::Predict;
                        Task::none()
                    }
                    chrome::Mode::LiveMap => {
                        state.screen = Screen::LiveMap;
                        state.live.begin(&state.client).map(Message::Live)
                    }
                }
            }
            Message::Chrome(event) => {
                state.chrome.update(event);
                Task::none()
            }
            Message::Predict(event) => state
                .predict
                .update(event, &state.client)
                .map(Message::Predict),
            Message::Live(event) => state.live.update(event, &state.client).map(Message::Live),
            Message::NavigateHome => {
                state.screen = Screen::Landing;
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        match state.screen {
            Screen::Landing => state.chrome.view().map(Message::Chrome),
            Screen::Predict => {
                with_nav("Risk Prediction", state.predict.view().map(Message::Predict))
            }
            Screen::LiveMap => with_nav("Live Fire Map", state.live.view().map(Message::Live)),
        }
    }
}

fn with_nav<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    let nav = row![
        button(text("Home").size(14))
            .on_press(Message::NavigateHome)
            .padding(8),
        text(title).size(18),
    ]
    .spacing(16)
    .padding(8);

    column![
        nav,
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
    ]
    .into()
}
