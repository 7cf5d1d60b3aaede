fn main() {
    depviz::cli::run();
}
