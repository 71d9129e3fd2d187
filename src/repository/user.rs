use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::user::{NewUser, User},
    repository::{UserWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`UserWriter`].
pub struct DieselUserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselUserRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl UserWriter for DieselUserRepository<'_> {
    fn upsert_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.pool.get()?;
        let insertable: DbNewUser = new_user.into();
        let user = diesel::insert_into(users::table)
            .values(&insertable)
            .on_conflict(users::id)
            .do_update()
            .set((
                users::name.eq(insertable.name),
                users::email.eq(insertable.email),
            ))
            .get_result::<DbUser>(&mut conn)?;

        Ok(user.into())
    }
}
