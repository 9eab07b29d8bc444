fn main() {
    codeowners_report::app::cli::run();
}
