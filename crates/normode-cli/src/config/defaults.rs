pub struct DefaultsConfig {
    pub animation_steps: usize,
    pub displacement_scale: f64,
    pub show_connections: bool,
    pub bonds_per_type: Vec<(&'static str, usize)>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            animation_steps: 10,
            displacement_scale: 1.0,
            show_connections: true,
            bonds_per_type: vec![
                ("H", 1),
                ("B", 3),
                ("C", 4),
                ("N", 3),
                ("O", 2),
                ("F", 1),
                ("Si", 4),
                ("P", 3),
                ("S", 2),
                ("Cl", 1),
                ("Br", 1),
                ("I", 1),
            ],
        }
    }
}
