fn main() {
    sequencer_launcher::app::cli::run();
}
