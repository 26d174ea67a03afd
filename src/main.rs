fn main() {
    depviz::app::cli::run();
}
