//! Process hardening and terminal restore on signals.

// Leave alternate screen, reset attributes, show cursor.
const RESTORE_SEQ: &[u8] = b"\x1b[?1049l\x1b[0m\x1b[?25h\r\n";

/// Put cooked-mode flags back on stdin using termios directly.
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: restore the terminal, then exit without running
/// destructors. Only async-signal-safe calls in here.
extern "C" fn signal_handler(_: libc::c_int) {
    reset_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_SEQ.as_ptr() as *const libc::c_void,
                RESTORE_SEQ.len(),
            );
        }
        libc::_exit(130);
    }
}

/// Keep passwords out of core dumps and away from ptrace by other
/// unprivileged processes.
pub fn harden() {
    unsafe {
        let no_core = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        if libc::setrlimit(libc::RLIMIT_CORE, &no_core) != 0 {
            log::debug!("could not disable core dumps");
        }
        #[cfg(target_os = "linux")]
        if libc::prctl(libc::PR_SET_DUMPABLE, 0) != 0 {
            log::debug!("could not clear dumpable flag");
        }
    }
}

/// Install signal handlers. Call early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Reset a terminal a previous crashed run may have left in raw mode.
pub fn reset_terminal() {
    if unsafe { libc::isatty(0) } == 1 {
        reset_termios();
    }
}
