use std::io;
use std::process;

use protoc_gen_pluginexample::PluginError;

fn main() {
    // stdout carries the response, so logs go to stderr only.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = fallible_main() {
        eprintln!("protoc-gen-pluginexample: {}", e);
        process::exit(1);
    }
}

fn fallible_main() -> Result<(), PluginError> {
    protoc_gen_pluginexample::execute(io::stdin().lock(), io::stdout().lock())
}
