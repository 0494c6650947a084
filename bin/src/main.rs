#[macro_use]
extern crate log;

mod options;

use clap::Parser;
use options::*;
use shading::base::*;
use shading::geometry::*;
use shading::interaction::*;
use shading::reflection::*;
use shading::sampling::*;
use shading::spectrum::*;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), String> {
    options.validate()?;

    let dg = DifferentialGeometry::from_normal(Normal3::new(0.0, 0.0, 1.0));
    let bxdf = build_model(options, &dg);
    info!("{}", bxdf);

    let theta = radians(options.theta);
    let wo = Vector3::new(theta.sin(), 0.0, theta.cos());

    let n = options.samples;
    let u = stratified_grid_2d(n, n);
    debug!("Estimating with {} samples", u.len());

    let rho_hd = finite(bxdf.rho_hd(&wo, &dg, &u), "rho_hd")?;
    println!("rho_hd {}", rho_hd);

    if options.hh {
        // Pair each outgoing stratum with the mirrored incident stratum.
        let u2: Vec<Point2f> = u.iter().rev().copied().collect();
        let rho_hh = finite(bxdf.rho_hh(&dg, &u, &u2), "rho_hh")?;
        println!("rho_hh {}", rho_hh);
    }

    Ok(())
}

/// Builds the scattering model selected on the command line.
///
/// * `options` - Command line options.
/// * `dg`      - Differential geometry at the shading point.
fn build_model(options: &Options, dg: &DifferentialGeometry) -> BxDF {
    let c = &options.reflectance;
    let colour = Spectrum::rgb(c[0], c[1], c[2]);

    match options.model {
        Model::Reflection => LambertianReflection::new(colour).into(),
        Model::Transmission => {
            let rotation = Matrix3x3::rotate(&Vector3::x_axis(), radians(options.tilt));
            let n = Normal3::from(rotation.transform_vector(&Vector3::from(dg.ng)));
            LambertianTransmission::new(n, colour).into()
        }
        Model::Horizon => {
            let h = &options.horizon;
            LambertianHorizon::new(
                Matrix3x3::frame(&Vector3::from(dg.ns)),
                colour,
                HorizonAngles::new(h[0], h[1], h[2], h[3]),
                options.blend,
                options.strength,
            )
            .into()
        }
    }
}

/// Returns the estimate or an error if it is not a finite colour.
///
/// * `s`    - The estimate.
/// * `name` - Name of the quantity for the error message.
fn finite(s: Spectrum, name: &str) -> Result<Spectrum, String> {
    if s.has_nans() || s.to_rgb().iter().any(|c| c.is_infinite()) {
        Err(format!("{name} estimate {s} is not finite."))
    } else {
        Ok(s)
    }
}
