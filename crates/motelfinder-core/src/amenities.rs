//! Stored option values for suite periods, services and payment methods,
//! with the labels the listing page shows for them.

pub const SUITE_PERIODS: [(&str, &str); 5] = [
    ("2h", "2 horas"),
    ("4h", "4 horas"),
    ("6h", "6 horas"),
    ("12h", "12 horas (Pernoite)"),
    ("24h", "24 horas (Diária)"),
];

pub const SERVICES: [(&str, &str); 14] = [
    ("breakfast", "Café da Manhã"),
    ("restaurant", "Restaurante"),
    ("frigobar", "Frigobar"),
    ("room_service", "Serviço de Quarto"),
    ("jacuzzi", "Jacuzzi/Hidro"),
    ("sauna", "Sauna"),
    ("pole_dance", "Pole Dance"),
    ("dungeon", "Dungeon/Masmorra"),
    ("swing", "Balanço"),
    ("bdsm_kit", "Kit BDSM"),
    ("adult_toys", "Toys Adultos"),
    ("streaming", "Streaming (Netflix etc)"),
    ("parking", "Estacionamento Privativo"),
    ("wifi", "Wi-Fi"),
];

pub const PAYMENT_METHODS: [(&str, &str); 5] = [
    ("credit_card", "Cartão de Crédito"),
    ("debit_card", "Cartão de Débito"),
    ("pix", "PIX"),
    ("cash", "Dinheiro"),
    ("crypto", "Criptomoedas"),
];

fn lookup<'a>(table: &[(&str, &'static str)], value: &'a str) -> &'a str {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |&(_, label)| label)
}

/// Display label for a suite period; unknown values are shown as stored.
#[must_use]
pub fn suite_period_label(value: &str) -> &str {
    lookup(&SUITE_PERIODS, value)
}

#[must_use]
pub fn service_label(value: &str) -> &str {
    lookup(&SERVICES, value)
}

#[must_use]
pub fn payment_method_label(value: &str) -> &str {
    lookup(&PAYMENT_METHODS, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_map_to_labels() {
        assert_eq!(suite_period_label("12h"), "12 horas (Pernoite)");
        assert_eq!(service_label("jacuzzi"), "Jacuzzi/Hidro");
        assert_eq!(payment_method_label("pix"), "PIX");
    }

    #[test]
    fn unknown_values_pass_through() {
        assert_eq!(suite_period_label("3h"), "3h");
        assert_eq!(service_label("Piscina"), "Piscina");
        assert_eq!(payment_method_label("voucher"), "voucher");
    }
}
