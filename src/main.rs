fn main() {
    scaffold_hook::app::cli::run();
}
