mod settings;

use log::{debug, error, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;
use std::{f64::consts::TAU, hint::black_box, path::PathBuf, time::Instant};

use hako::{
    contains, distance_squared,
    math::{point3, vec3, Point3},
    shapes::{Aabb, Capsule, Frustum, Obb, Sphere},
    BoundingVolume, BoundingVolumes,
};
use settings::BenchSettings;

#[derive(Debug)]
pub enum BenchError {
    Io(std::io::Error),
    Settings(serde_yaml::Error),
    Logger(fern::InitError),
    ThreadPool(rayon::ThreadPoolBuildError),
    Mismatch(usize),
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::Io(why) => write!(f, "Settings file: {}", why),
            BenchError::Settings(why) => write!(f, "Settings: {}", why),
            BenchError::Logger(why) => write!(f, "Logger: {}", why),
            BenchError::ThreadPool(why) => write!(f, "Thread pool: {}", why),
            BenchError::Mismatch(i) => {
                write!(f, "Parallel result differs from serial at volume {}", i)
            }
        }
    }
}

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("bench.log")?)
        .apply()?;
    Ok(())
}

struct Shapes {
    points: Vec<Point3<f64>>,
    boxes: Vec<Aabb<f64, 3>>,
    spheres: Vec<Sphere<f64, 3>>,
    capsules: Vec<Capsule<f64, 3>>,
    obbs: Vec<Obb<f64, 3>>,
    frusta: Vec<Frustum<f64>>,
}

fn random_point(rng: &mut Pcg32) -> Point3<f64> {
    point3(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    )
}

impl Shapes {
    fn new(settings: &BenchSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let n = settings.shape_count.max(1);

        let points = (0..n).map(|_| random_point(&mut rng)).collect();
        let boxes = (0..n)
            .map(|_| Aabb::new(random_point(&mut rng), random_point(&mut rng)))
            .collect();
        let spheres = (0..n)
            .map(|_| Sphere::new(random_point(&mut rng), rng.gen_range(0.1..5.0)))
            .collect();
        let capsules = (0..n)
            .map(|_| {
                Capsule::new(
                    random_point(&mut rng),
                    random_point(&mut rng),
                    rng.gen_range(0.1..3.0),
                )
            })
            .collect();
        let obbs = (0..n)
            .map(|_| {
                let axis = vec3(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 1.0);
                Obb::new(
                    random_point(&mut rng),
                    vec3(
                        rng.gen_range(0.1..5.0),
                        rng.gen_range(0.1..5.0),
                        rng.gen_range(0.1..5.0),
                    ),
                    hako::math::Matrix::rotation_3d(axis, rng.gen_range(0.0..TAU)),
                )
            })
            .collect();
        let frusta = (0..n)
            .map(|_| {
                let position = random_point(&mut rng);
                let angle: f64 = rng.gen_range(0.0..TAU);
                let forward = vec3(angle.cos(), rng.gen_range(-0.5..0.5), angle.sin());
                Frustum::from_view(
                    position,
                    position + forward,
                    vec3(0.0, 1.0, 0.0),
                    rng.gen_range(0.5..1.5),
                    rng.gen_range(0.5..2.0),
                    0.1,
                    rng.gen_range(2.0..20.0),
                )
            })
            .collect();

        Self {
            points,
            boxes,
            spheres,
            capsules,
            obbs,
            frusta,
        }
    }

    fn volumes(&self) -> BoundingVolumes<f64> {
        let mut ret: BoundingVolumes<f64> = Vec::new();
        ret.extend(self.boxes.iter().map(|&v| BoundingVolume::from(v)));
        ret.extend(self.spheres.iter().map(|&v| BoundingVolume::from(v)));
        ret.extend(self.obbs.iter().map(|&v| BoundingVolume::from(v)));
        ret.extend(self.frusta.iter().map(|&v| BoundingVolume::from(v)));
        ret
    }
}

// Times `f` over pairs drawn from `lhs` and `rhs`, logs the rate and returns the checksum
macro_rules! suite {
    ( $name:expr, $iterations:expr, $lhs:expr, $rhs:expr, $f:expr ) => {{
        let lhs = &$lhs;
        let rhs = &$rhs;
        let f = $f;
        let mut acc = 0.0f64;
        let start = Instant::now();
        for i in 0..$iterations {
            let a = &lhs[i % lhs.len()];
            // Offset so that the pairs don't repeat with the lhs period
            let b = &rhs[(i * 7 + 3) % rhs.len()];
            acc += f(black_box(a), black_box(b));
        }
        let elapsed_ns = start.elapsed().as_nanos() as f64;
        info!(
            "{:<24} {:8.1} ms total, {:6.2} ns per query",
            $name,
            elapsed_ns * 1e-6,
            elapsed_ns / ($iterations as f64)
        );
        debug!("{} checksum {}", $name, acc);
        acc
    }};
}

fn hit(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn run_suites(settings: &BenchSettings, shapes: &Shapes) {
    let n = settings.iterations;
    let s = shapes;

    suite!("Aabb contains Point", n, s.boxes, s.points, |a, b| {
        hit(contains(a, b))
    });
    suite!("Aabb contains Sphere", n, s.boxes, s.spheres, |a, b| {
        hit(contains(a, b))
    });
    suite!("Sphere contains Aabb", n, s.spheres, s.boxes, |a, b| {
        hit(contains(a, b))
    });
    suite!("Obb contains Sphere", n, s.obbs, s.spheres, |a, b| {
        hit(contains(a, b))
    });
    suite!("Frustum contains Sphere", n, s.frusta, s.spheres, |a, b| {
        hit(contains(a, b))
    });
    suite!("Frustum contains Aabb", n, s.frusta, s.boxes, |a, b| {
        hit(contains(a, b))
    });
    suite!("Capsule contains Sphere", n, s.capsules, s.spheres, |a, b| {
        hit(contains(a, b))
    });

    suite!("Aabb to Point", n, s.boxes, s.points, |a, b| {
        distance_squared(a, b)
    });
    suite!("Aabb to Aabb", n, s.boxes, s.boxes, |a, b| {
        distance_squared(a, b)
    });
    suite!("Sphere to Sphere", n, s.spheres, s.spheres, |a, b| {
        distance_squared(a, b)
    });
    suite!("Capsule to Point", n, s.capsules, s.points, |a, b| {
        distance_squared(a, b)
    });
    suite!("Obb to Point", n, s.obbs, s.points, |a, b| {
        distance_squared(a, b)
    });
    suite!("Frustum to Point", n, s.frusta, s.points, |a, b| {
        distance_squared(a, b)
    });
}

/// Runs the same queries serially and on the pool, the results have to match bit for bit.
fn check_parallel(settings: &BenchSettings, shapes: &Shapes) -> Result<(), BenchError> {
    let thread_count = settings.thread_count.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(BenchError::ThreadPool)?;

    let volumes = shapes.volumes();
    let query = |v: &BoundingVolume<f64>| -> (bool, u64) {
        let (contained, d) = shapes.points.iter().fold((false, 0.0f64), |(c, acc), p| {
            (c || contains(v, p), acc + distance_squared(v, p))
        });
        (contained, d.to_bits())
    };

    let start = Instant::now();
    let serial = volumes.iter().map(query).collect::<Vec<_>>();
    let serial_s = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let parallel = pool.install(|| volumes.par_iter().map(query).collect::<Vec<_>>());
    let parallel_s = start.elapsed().as_secs_f64();

    info!(
        "{} volumes x {} points: serial {:.3}s, {} threads {:.3}s",
        volumes.len(),
        shapes.points.len(),
        serial_s,
        thread_count,
        parallel_s
    );

    match serial.iter().zip(parallel.iter()).position(|(a, b)| a != b) {
        Some(i) => Err(BenchError::Mismatch(i)),
        None => Ok(()),
    }
}

fn run() -> Result<(), BenchError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => BenchSettings::load(&PathBuf::from(path))?,
        None => BenchSettings::default(),
    };
    setup_logger(settings.log_level.into()).map_err(BenchError::Logger)?;
    debug!("{:?}", settings);

    let shapes = Shapes::new(&settings);
    run_suites(&settings, &shapes);
    check_parallel(&settings, &shapes)
}

fn main() {
    if let Err(why) = run() {
        // The logger might not be up yet
        error!("{}", why);
        eprintln!("Bench failed: {}", why);
        std::process::exit(1);
    }
}
