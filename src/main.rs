use std::io;

mod logging;

fn main() -> io::Result<()> {
    let _logging = logging::init();
    zport::app::run()
}
