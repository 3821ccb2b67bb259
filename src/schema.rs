table! {
    appointments (id) {
        id -> Unsigned<Bigint>,
        patient_name -> Varchar,
        doctor -> Varchar,
        date -> Varchar,
        slot -> Varchar,
        username -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    users (username) {
        username -> Varchar,
        password -> Varchar,
        role -> Varchar,
        created_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(appointments, users,);
