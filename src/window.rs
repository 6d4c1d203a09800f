use crate::codec::{layer_to_name, mask_to_names};
use crate::config::Options;
use crate::lifetime::Lifetime;
use iced::mouse::Cursor;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme};
use iced_layershell::reexport::{Anchor, KeyboardInteractivity, Layer};
use iced_layershell::settings::LayerShellSettings;
use iced_layershell::to_layer_message;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Used only when the output width is unknown and the surface cannot stretch.
pub const FALLBACK_WIDTH: u32 = 1920;

const FILL: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Layer-surface properties, set one by one before the surface is mapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSurface {
    layer: Layer,
    anchors: Anchor,
    margins: (i32, i32, i32, i32),
    scope: Option<String>,
    size: (u32, u32),
}

impl Default for ShellSurface {
    fn default() -> Self {
        Self {
            layer: Layer::Top,
            anchors: Anchor::Top,
            margins: (0, 0, 0, 0),
            scope: None,
            size: (0, 0),
        }
    }
}

/// Width 0 asks the compositor to stretch between the left and right anchors.
fn surface_width(options: &Options) -> u32 {
    match options.width {
        Some(width) => width,
        None if options.anchors.contains(Anchor::Left | Anchor::Right) => 0,
        None => {
            warn!(width = FALLBACK_WIDTH, "output width unknown, pass --width to override");
            FALLBACK_WIDTH
        }
    }
}

impl ShellSurface {
    pub fn configure(options: &Options) -> Self {
        let mut surface = Self::default();
        surface
            .set_layer(options.layer)
            .set_anchors(options.anchors)
            .set_size(surface_width(options), options.height)
            .set_margins(options.margins)
            .set_scope(&options.scope);
        surface
    }

    pub fn set_layer(&mut self, layer: Layer) -> &mut Self {
        self.layer = layer;
        self
    }

    pub fn set_anchors(&mut self, anchors: Anchor) -> &mut Self {
        self.anchors = anchors;
        self
    }

    /// Same margin on all four edges.
    pub fn set_margins(&mut self, margins: i32) -> &mut Self {
        self.margins = (margins, margins, margins, margins);
        self
    }

    pub fn set_scope(&mut self, scope: &str) -> &mut Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = (width, height);
        self
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn anchors(&self) -> Anchor {
        self.anchors
    }

    pub fn margins(&self) -> (i32, i32, i32, i32) {
        self.margins
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Layer-surface namespace; empty when no scope was set.
    pub fn namespace(&self) -> &str {
        self.scope.as_deref().unwrap_or_default()
    }

    pub fn settings(&self) -> LayerShellSettings {
        LayerShellSettings {
            size: Some(self.size),
            exclusive_zone: 0,
            anchor: self.anchors,
            layer: self.layer,
            margin: self.margins,
            keyboard_interactivity: KeyboardInteractivity::None,
            events_transparent: false,
            ..Default::default()
        }
    }
}

pub struct Panel {
    lifetime: Lifetime,
    cache: canvas::Cache,
}

#[to_layer_message]
#[derive(Debug, Clone)]
pub enum Message {
    Expired,
}

pub fn boot(lifetime: Option<Duration>) -> (Panel, Task<Message>) {
    let lifetime = Lifetime::new(lifetime);
    let task = if lifetime.is_immediate() {
        Task::done(Message::Expired)
    } else {
        Task::none()
    };

    (
        Panel {
            lifetime,
            cache: canvas::Cache::default(),
        },
        task,
    )
}

pub fn update(state: &mut Panel, message: Message) -> Task<Message> {
    match message {
        Message::Expired => {
            if state.lifetime.fire() {
                info!("lifetime elapsed, quitting");
                return iced::exit();
            }
        }
        _ => {}
    }

    Task::none()
}

pub fn view(state: &Panel) -> Element<'_, Message, Theme, Renderer> {
    Canvas::new(state)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn subscription(state: &Panel) -> Subscription<Message> {
    state.lifetime.subscription()
}

impl canvas::Program<Message> for &Panel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                frame.fill_rectangle(Point::ORIGIN, frame.size(), FILL);
            });

        vec![geometry]
    }
}

/// Maps the surface and runs the event loop until quit.
pub fn run(options: Options) -> Result<(), iced_layershell::Error> {
    let surface = ShellSurface::configure(&options);
    debug!(
        layer = layer_to_name(surface.layer()),
        anchors = %mask_to_names(surface.anchors()),
        size = ?surface.size(),
        margins = ?surface.margins(),
        namespace = surface.namespace(),
        "configured layer surface"
    );

    let namespace = surface.namespace().to_string();
    let layer_settings = surface.settings();
    let lifetime = options.lifetime;

    iced_layershell::application(
        move || boot(lifetime),
        move || namespace.clone(),
        update,
        view,
    )
        .antialiasing(false)
        .style(|_state, _theme| iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
        })
        .subscription(subscription)
        .layer_settings(layer_settings)
        .run()
}
