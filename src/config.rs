use lazy_static::lazy_static;

pub fn config() -> &'static Config {
    &*SINGLETON
}

lazy_static! {
    static ref SINGLETON: Config = Config::from_env();
}

macro_rules! impl_config {
    ($($name:ident: $type:ty = $value:expr),* $(,)*) => {
        #[derive(Debug)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Config {
            /// Each field reads the environment variable of the same
            /// name, uppercased, falling back to its default.
            pub fn from_env() -> Config {
                Config {
                    $(
                        $name: get_or_default!(stringify!($name).to_uppercase(), $value)
                    ),*
                }
            }
        }
    };
}

macro_rules! get_or_default {
    ($key:expr, $default_value:expr) => {
        match std::env::var($key) {
            Ok(raw) => raw.parse().expect("config value parsing failed"),
            Err(_) => $default_value,
        }
    };
}

impl_config! {
    port: u16 = 8080,
    color: String = String::from("#ff00ff"),
    log_level: String = String::from("info"),
}
