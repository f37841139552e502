fn main() {
    atelier::app::cli::run();
}
