use anyhow::{Context, Result, bail};
use canvas_color::ColorValue;
use colored::Colorize;
use std::env;

/// Channel arithmetic requested on the command line, applied in order.
#[derive(Debug, Clone, Copy)]
enum Op {
    Add(f64),
    Sub(f64),
    Mul(f64),
    Div(f64),
}

impl Op {
    fn apply(self, color: ColorValue) -> ColorValue {
        match self {
            Op::Add(x) => color + x,
            Op::Sub(x) => color - x,
            Op::Mul(x) => color * x,
            Op::Div(x) => color / x,
        }
    }
}

fn usage() -> &'static str {
    "usage: canvas-color [--add N | --sub N | --mul N | --div N]... <COLOR>..."
}

/// What the command line asked for.
#[derive(Debug)]
enum Command {
    Help,
    Show { ops: Vec<Op>, colors: Vec<String> },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut ops = Vec::new();
    let mut colors = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let make: Option<fn(f64) -> Op> = match arg.as_str() {
            "--add" => Some(Op::Add),
            "--sub" => Some(Op::Sub),
            "--mul" => Some(Op::Mul),
            "--div" => Some(Op::Div),
            "-h" | "--help" => return Ok(Command::Help),
            _ => None,
        };

        match make {
            Some(make) => {
                let value = iter
                    .next()
                    .with_context(|| format!("{arg} needs a number\n{}", usage()))?;
                let value: f64 = value
                    .parse()
                    .with_context(|| format!("{arg}: `{value}` is not a number"))?;
                ops.push(make(value));
            }
            None => colors.push(arg.clone()),
        }
    }

    if colors.is_empty() {
        bail!("{}", usage());
    }

    Ok(Command::Show { ops, colors })
}

/// 8-bit swatch values; out-of-range channels are clamped for display only.
fn swatch_byte(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

fn print_color(input: &str, color: &ColorValue) {
    let swatch = "      ".on_truecolor(
        swatch_byte(color.red),
        swatch_byte(color.green),
        swatch_byte(color.blue),
    );

    println!("{} {}", swatch, input.bold());
    println!("  channels  r={} g={} b={} a={}", color.red, color.green, color.blue, color.alpha);
    println!("  hex       {}", color.hex());
    println!("  hex+alpha {}", color.hex_with_alpha());
    println!("  rgb       {}", color.rgb_string());
    println!("  rgb %     {}", color.rgb_percent_string());
    println!("  value     {}", color.packed_value());
    println!("  luma      {:.4}", color.luma());
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    env_logger::init();

    let (ops, colors) = match parse_args(&args)? {
        Command::Help => {
            println!("{}", usage());
            return Ok(());
        }
        Command::Show { ops, colors } => (ops, colors),
    };
    log::debug!("operations: {:?}", ops);

    for input in &colors {
        let color = ColorValue::parse(input).with_context(|| format!("failed to parse `{input}`"))?;
        let color = ops.iter().fold(color, |c, op| op.apply(c));
        print_color(input, &color);
    }

    Ok(())
}
