use crate::codec::{self, joined};
use clap::Parser;
use iced_layershell::reexport::{Anchor, Layer};

#[derive(Parser, Clone, Debug)]
#[command(name = "layershell-demo")]
#[command(about = "Red layer-shell panel for Wayland compositors")]
pub struct Args {
    /// Window margins
    #[arg(long, value_name = "pixels", allow_negative_numbers = true)]
    pub margins: Option<i32>,

    /// Window scope
    #[arg(long, value_name = "namespace")]
    pub scope: Option<String>,

    #[arg(
        long,
        value_name = "anchors",
        value_parser = codec::names_to_mask,
        help = format!("Either {}", joined(codec::anchor_names())),
    )]
    pub anchors: Option<Anchor>,

    #[arg(
        long,
        value_name = "layer",
        value_parser = codec::name_to_layer,
        help = format!("One of {}", joined(codec::layer_names())),
    )]
    pub layer: Option<Layer>,

    /// Width of the window
    #[arg(long, value_name = "pixels")]
    pub width: Option<u32>,

    /// Height of the window
    #[arg(long, value_name = "pixels")]
    pub height: Option<u32>,

    /// Time the program stays alive
    #[arg(long, value_name = "Time(ms)")]
    pub time: Option<u64>,
}
