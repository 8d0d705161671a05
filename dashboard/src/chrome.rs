use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text,
};
use iced::{Background, Color, Element, Length};

const SCROLL_THRESHOLD: f32 = 50.0;
const FADE_STEP: f32 = 0.1;

/// Which screen a mode option leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Predict,
    LiveMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayPhase {
    Hidden,
    FadingIn,
    Shown,
    FadingOut,
}

/// Landing screen state: the mode-selection overlay, hover highlights, and
/// the header style switch on scroll. No state beyond what is displayed.
#[derive(Debug)]
pub struct Landing {
    overlay: OverlayPhase,
    overlay_alpha: f32,
    hovered_option: Option<Mode>,
    hovered_leaf: Option<usize>,
    header_scrolled: bool,
}

#[derive(Debug, Clone)]
pub enum Event {
    OpenOverlay,
    BackdropPressed,
    FadeTick,
    OptionEntered(Mode),
    OptionExited(Mode),
    /// Handled by the application shell, which switches screens.
    ModeChosen(Mode),
    LeafEntered(usize),
    LeafExited(usize),
    Scrolled(f32),
}

impl Default for Landing {
    fn default() -> Self {
        Self {
            overlay: OverlayPhase::Hidden,
            overlay_alpha: 0.0,
            hovered_option: None,
            hovered_leaf: None,
            header_scrolled: false,
        }
    }
}

impl Landing {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the fade animation needs ticks.
    pub fn is_fading(&self) -> bool {
        matches!(
            self.overlay,
            OverlayPhase::FadingIn | OverlayPhase::FadingOut
        )
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay = OverlayPhase::Hidden;
        self.overlay_alpha = 0.0;
        self.hovered_option = None;
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::OpenOverlay => {
                if self.overlay == OverlayPhase::Hidden {
                    self.overlay = OverlayPhase::FadingIn;
                    self.overlay_alpha = 0.0;
                }
            }
            Event::BackdropPressed => {
                if matches!(self.overlay, OverlayPhase::Shown | OverlayPhase::FadingIn) {
                    self.overlay = OverlayPhase::FadingOut;
                }
            }
            Event::FadeTick => self.step_fade(),
            Event::OptionEntered(mode) => self.hovered_option = Some(mode),
            Event::OptionExited(mode) => {
                if self.hovered_option == Some(mode) {
                    self.hovered_option = None;
                }
            }
            Event::LeafEntered(index) => self.hovered_leaf = Some(index),
            Event::LeafExited(index) => {
                if self.hovered_leaf == Some(index) {
                    self.hovered_leaf = None;
                }
            }
            Event::Scrolled(offset) => self.header_scrolled = offset > SCROLL_THRESHOLD,
            Event::ModeChosen(_) => {}
        }
    }

    fn step_fade(&mut self) {
        match self.overlay {
            OverlayPhase::FadingIn => {
                self.overlay_alpha += FADE_STEP;
                if self.overlay_alpha >= 1.0 {
                    self.overlay_alpha = 1.0;
                    self.overlay = OverlayPhase::Shown;
                }
            }
            OverlayPhase::FadingOut => {
                self.overlay_alpha -= FADE_STEP;
                if self.overlay_alpha <= 0.0 {
                    self.overlay_alpha = 0.0;
                    self.overlay = OverlayPhase::Hidden;
                }
            }
            OverlayPhase::Hidden | OverlayPhase::Shown => {}
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let header = container(
            row![
                text("Wildfire Watch").size(20),
                text("forest fire risk & live detections").size(13),
            ]
            .spacing(16)
            .padding(12),
        )
        .width(Length::Fill)
        .style({
            let scrolled = self.header_scrolled;
            move |_| {
                let background = if scrolled {
                    Color::from_rgba(0.05, 0.08, 0.06, 0.95)
                } else {
                    Color::TRANSPARENT
                };
                container::Style {
                    background: Some(Background::Color(background)),
                    ..container::Style::default()
                }
            }
        });

        let mut leaves = row![].spacing(12);
        for index in 0..3 {
            let size = if self.hovered_leaf == Some(index) {
                30
            } else {
                24
            };
            leaves = leaves.push(
                mouse_area(text("🍃").size(size))
                    .on_enter(Event::LeafEntered(index))
                    .on_exit(Event::LeafExited(index)),
            );
        }

        let hero = column![
            leaves,
            text("Predict. Detect. Protect.").size(40),
            text("Pick a spot on the map for a fire-risk forecast, or watch live satellite detections.")
                .size(16),
            button(text("Let's Save Our Forests").size(18))
                .on_press(Event::OpenOverlay)
                .padding(14),
        ]
        .spacing(18)
        .padding(60);

        let about = column![
            text("How it works").size(24),
            text("The prediction service combines weather, vegetation, and fire-weather indices into a single risk score.")
                .size(14),
            text("The live map streams satellite fire detections and refreshes itself every few seconds.")
                .size(14),
        ]
        .spacing(10)
        .padding(60);

        let base = column![
            header,
            scrollable(column![hero, about].spacing(200))
                .on_scroll(|viewport| Event::Scrolled(viewport.absolute_offset().y))
                .height(Length::Fill)
        ];

        let base: Element<'_, Event> = base.into();
        if self.overlay == OverlayPhase::Hidden {
            base
        } else {
            stack![base, self.overlay_view()].into()
        }
    }

    fn overlay_view(&self) -> Element<'_, Event> {
        let card = container(
            column![
                text("Choose Your Mode").size(26),
                row![
                    self.mode_option(
                        Mode::Predict,
                        "Risk Prediction",
                        "Click anywhere on the map for a localized forecast",
                    ),
                    self.mode_option(
                        Mode::LiveMap,
                        "Live Fire Map",
                        "Real-time satellite detections with filters",
                    ),
                ]
                .spacing(16),
            ]
            .spacing(18),
        )
        .padding(28)
        .style({
            let alpha = self.overlay_alpha;
            move |_| container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.10,
                    0.12,
                    0.11,
                    alpha.max(0.05),
                ))),
                ..container::Style::default()
            }
        });

        let backdrop_alpha = 0.6 * self.overlay_alpha;
        opaque(
            mouse_area(center(opaque(card)).style(move |_| container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.0,
                    0.0,
                    0.0,
                    backdrop_alpha,
                ))),
                ..container::Style::default()
            }))
            .on_press(Event::BackdropPressed),
        )
    }

    fn mode_option<'a>(
        &self,
        mode: Mode,
        title: &'a str,
        description: &'a str,
    ) -> Element<'a, Event> {
        let hovered = self.hovered_option == Some(mode);
        let body = container(
            column![text(title).size(18), text(description).size(12)].spacing(6),
        )
        .padding(18)
        .width(Length::Fixed(220.0))
        .style(move |_| container::Style {
            background: Some(Background::Color(if hovered {
                Color::from_rgba(0.22, 0.45, 0.30, 0.9)
            } else {
                Color::from_rgba(0.15, 0.22, 0.18, 0.9)
            })),
            ..container::Style::default()
        });

        mouse_area(body)
            .on_enter(Event::OptionEntered(mode))
            .on_exit(Event::OptionExited(mode))
            .on_press(Event::ModeChosen(mode))
            .into()
    }
}
