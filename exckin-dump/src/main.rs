// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::{Parser, Subcommand};

use exckin_core::algorithm::fk::ForwardKinematics;
use exckin_core::geometry::shortest_rotation;
use exckin_core::linkage::ActuatorState;

mod config;
mod linkage;
mod palette;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Excavator linkage inspection tool", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short, long)]
    config: Option<String>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single pose and print its line segments.
    Pose {
        /// Boom cylinder extension.
        boom: f64,
        /// Arm cylinder extension.
        arm: f64,
        /// Attachment cylinder extension.
        attachment: f64,
        /// Slew angle in radians.
        #[arg(allow_negative_numbers = true)]
        slew: f64,
    },
    /// Sample actuator states and dump the effector point cloud.
    Cloud {
        /// Number of samples, overrides the configured count.
        #[arg(short = 'n', long)]
        samples: Option<usize>,
        /// Output file.
        #[arg(short, long, default_value = "cloud.csv")]
        output: String,
    },
    /// Sweep the stroke envelope and report reach extents.
    Envelope {
        /// Grid resolution per actuator.
        #[arg(short, long, default_value_t = 25)]
        resolution: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_offset_to_local().ok();
    log_config.set_time_format_rfc2822();
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let local_config = std::env::current_dir()?.join("exckin.toml");

    let config = if let Some(path) = args.config.as_deref() {
        config::DumpConfig::try_from_file(vec![path])?
    } else {
        // Try the global system location first, then the local directory.
        config::DumpConfig::try_from_file(vec![
            "/etc/exckin/exckin.toml",
            local_config.to_str().unwrap(),
        ])?
    };

    log::trace!("{:#?}", config);

    match args.command {
        Command::Pose {
            boom,
            arm,
            attachment,
            slew,
        } => pose(
            &config,
            ActuatorState::new(boom, arm, attachment, shortest_rotation(slew)),
        ),
        Command::Cloud { samples, output } => {
            cloud(&config, samples.unwrap_or(config.samples), &output)
        }
        Command::Envelope { resolution } => envelope(&config, resolution),
    }
}

fn pose(config: &config::DumpConfig, state: ActuatorState) -> anyhow::Result<()> {
    let fk = ForwardKinematics::new(config.linkage);

    let angles = fk.joint_angles(&state)?;
    log::debug!(
        "Slew:       {:5.2}rad {:6.2}°",
        angles.slew,
        angles.slew.to_degrees()
    );
    log::debug!(
        "Boom:       {:5.2}rad {:6.2}°",
        angles.boom,
        angles.boom.to_degrees()
    );
    log::debug!(
        "Arm:        {:5.2}rad {:6.2}°",
        angles.arm,
        angles.arm.to_degrees()
    );
    log::debug!(
        "Attachment: {:5.2}rad {:6.2}°",
        angles.attachment,
        angles.attachment.to_degrees()
    );

    let pose = fk.pose(&angles);

    let names = ["frame", "boom", "arm", "attachment", "effector"];
    let mut colors = palette::ColorCycle::new();

    for (name, (from, to)) in names.iter().zip(pose.segments()) {
        println!(
            "{:<12} ({:7.2}, {:7.2}, {:7.2}) -> ({:7.2}, {:7.2}, {:7.2})  {}",
            name,
            from.x,
            from.y,
            from.z,
            to.x,
            to.y,
            to.z,
            colors.next().unwrap()
        );
    }

    log::info!("Effector at {}", pose);
    log::info!(
        "Viewport: azimuth {}°, elevation {}°",
        config.viewport.azimuth,
        config.viewport.elevation
    );

    Ok(())
}

fn cloud(config: &config::DumpConfig, samples: usize, output: &str) -> anyhow::Result<()> {
    use rand::Rng;

    let fk = ForwardKinematics::new(config.linkage);
    let stroke = &config.stroke;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["boom", "arm", "attachment", "slew", "x", "y", "z"])?;

    let mut rng = rand::thread_rng();
    let mut unreachable = 0;

    for _ in 0..samples {
        let state = ActuatorState::new(
            rng.gen_range(stroke.boom.min..=stroke.boom.max),
            rng.gen_range(stroke.arm.min..=stroke.arm.max),
            rng.gen_range(stroke.attachment.min..=stroke.attachment.max),
            rng.gen_range(stroke.slew.min..=stroke.slew.max),
        );

        match fk.solve(&state) {
            Ok(pose) => {
                writer.write_record([
                    state.boom.to_string(),
                    state.arm.to_string(),
                    state.attachment.to_string(),
                    state.slew.to_string(),
                    pose.effector.x.to_string(),
                    pose.effector.y.to_string(),
                    pose.effector.z.to_string(),
                ])?;
            }
            Err(e) => {
                unreachable += 1;
                log::warn!("Skipping sample {}: {}", state, e);
            }
        }
    }

    writer.flush()?;

    log::info!(
        "Wrote {} samples to {} ({} unreachable)",
        samples - unreachable,
        output,
        unreachable
    );

    Ok(())
}

fn envelope(config: &config::DumpConfig, resolution: usize) -> anyhow::Result<()> {
    let fk = ForwardKinematics::new(config.linkage);
    let stroke = &config.stroke;

    let resolution = resolution.max(2);
    let step = |range: &config::Stroke, index: usize| {
        range.min + (range.max - range.min) * index as f64 / (resolution - 1) as f64
    };

    let mut reach = (f64::INFINITY, f64::NEG_INFINITY);
    let mut height = (f64::INFINITY, f64::NEG_INFINITY);
    let mut unreachable = 0;

    for boom in 0..resolution {
        for arm in 0..resolution {
            for attachment in 0..resolution {
                let state = ActuatorState::new(
                    step(&stroke.boom, boom),
                    step(&stroke.arm, arm),
                    step(&stroke.attachment, attachment),
                    0.0,
                );

                match fk.solve(&state) {
                    Ok(pose) => {
                        reach.0 = reach.0.min(pose.effector.x);
                        reach.1 = reach.1.max(pose.effector.x);
                        height.0 = height.0.min(pose.effector.z);
                        height.1 = height.1.max(pose.effector.z);
                    }
                    Err(e) => {
                        unreachable += 1;
                        log::debug!("Unreachable grid point {}: {}", state, e);
                    }
                }
            }
        }
    }

    let total = resolution.pow(3);

    println!("Grid points:  {}", total);
    println!("Unreachable:  {}", unreachable);
    if unreachable < total {
        println!("Reach:        {:.2} .. {:.2}", reach.0, reach.1);
        println!("Height:       {:.2} .. {:.2}", height.0, height.1);
    }

    Ok(())
}
