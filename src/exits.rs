//! Exit handling: terminal restore, termination signals, core dump hardening.

/// Put the tty back into canonical, echoing mode.
pub fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, so it also runs after `process::exit`.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let reset = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                reset.as_ptr() as *const libc::c_void,
                reset.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through atexit cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit hook. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated secrets out of core dumps.
pub fn disable_core_dumps() {
    let none = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    let rlimit_failed = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &none) != 0 };
    if rlimit_failed {
        log::warn!("could not disable core dumps");
    }

    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
