use artoffun::app;

fn main() {
    std::process::exit(app::main());
}
