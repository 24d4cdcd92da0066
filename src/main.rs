fn main() {
    if let Err(err) = botflow_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
