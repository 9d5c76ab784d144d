use std::{env, process};

use random::{create_random_linked_list, create_random_linked_list_seeded};

pub mod linked_list;
pub mod random;

const DEFAULT_SIZE: usize = 7;

fn main() {
    // Initialize the logging library. Print log messages using the `log`
    // macros: https://docs.rs/log/0.4.8/log/
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();
    let size = match args.get(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(size) => size,
            Err(_) => {
                log::error!("invalid list size: {}", arg);
                process::exit(1);
            }
        },
        None => DEFAULT_SIZE,
    };

    let list = match args.get(2) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => create_random_linked_list_seeded(size, seed),
            Err(_) => {
                log::error!("invalid seed: {}", arg);
                process::exit(1);
            }
        },
        None => create_random_linked_list(size),
    };

    log::info!("built a randomized list of {} nodes", list.size());
    println!("{}", list);
}
