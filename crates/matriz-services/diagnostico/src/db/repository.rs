use crate::error::{DiagnosticoErrorExt, MatrizError, Result};
use crate::models::{Cargo, Empresa, Evaluacion, Ges, MatrizFila};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DiagnosticoRepository {
    pool: PgPool,
}

impl DiagnosticoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Empresas
    // =========================================================================

    pub async fn create_empresa(
        &self,
        nit: &str,
        nombre: &str,
        sector: Option<&str>,
        num_trabajadores: i32,
        email_contacto: Option<&str>,
    ) -> Result<Empresa> {
        sqlx::query_as::<_, Empresa>(
            r#"
            INSERT INTO empresas (nit, nombre, sector, num_trabajadores, email_contacto)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(nit)
        .bind(nombre)
        .bind(sector)
        .bind(num_trabajadores)
        .bind(email_contacto)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return MatrizError::already_exists("empresa", nit);
                }
            }
            MatrizError::from(e)
        })
    }

    pub async fn get_empresa(&self, id: Uuid) -> Result<Empresa> {
        sqlx::query_as::<_, Empresa>("SELECT * FROM empresas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| MatrizError::empresa_not_found(id.to_string()))
    }

    pub async fn list_empresas(&self) -> Result<Vec<Empresa>> {
        let empresas =
            sqlx::query_as::<_, Empresa>("SELECT * FROM empresas ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(empresas)
    }

    pub async fn update_empresa(
        &self,
        id: Uuid,
        nombre: &str,
        sector: Option<&str>,
        num_trabajadores: i32,
        email_contacto: Option<&str>,
    ) -> Result<Empresa> {
        sqlx::query_as::<_, Empresa>(
            r#"
            UPDATE empresas
            SET nombre = $1, sector = $2, num_trabajadores = $3,
                email_contacto = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(sector)
        .bind(num_trabajadores)
        .bind(email_contacto)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| MatrizError::empresa_not_found(id.to_string()))
    }

    pub async fn delete_empresa(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM empresas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MatrizError::empresa_not_found(id.to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Cargos
    // =========================================================================

    pub async fn create_cargo(
        &self,
        empresa_id: Uuid,
        nombre: &str,
        descripcion: Option<&str>,
        zona: Option<&str>,
        num_trabajadores: i32,
    ) -> Result<Cargo> {
        // FK failure surfaces as a missing empresa, not a 500
        self.get_empresa(empresa_id).await?;

        sqlx::query_as::<_, Cargo>(
            r#"
            INSERT INTO cargos (empresa_id, nombre, descripcion, zona, num_trabajadores)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(empresa_id)
        .bind(nombre)
        .bind(descripcion)
        .bind(zona)
        .bind(num_trabajadores)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return MatrizError::already_exists("cargo", nombre);
                }
            }
            MatrizError::from(e)
        })
    }

    pub async fn get_cargo(&self, id: Uuid) -> Result<Cargo> {
        sqlx::query_as::<_, Cargo>("SELECT * FROM cargos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| MatrizError::cargo_not_found(id.to_string()))
    }

    pub async fn list_cargos(&self, empresa_id: Uuid) -> Result<Vec<Cargo>> {
        self.get_empresa(empresa_id).await?;

        let cargos = sqlx::query_as::<_, Cargo>(
            "SELECT * FROM cargos WHERE empresa_id = $1 ORDER BY nombre",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cargos)
    }

    pub async fn update_cargo(
        &self,
        id: Uuid,
        nombre: &str,
        descripcion: Option<&str>,
        zona: Option<&str>,
        num_trabajadores: i32,
    ) -> Result<Cargo> {
        sqlx::query_as::<_, Cargo>(
            r#"
            UPDATE cargos
            SET nombre = $1, descripcion = $2, zona = $3,
                num_trabajadores = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(zona)
        .bind(num_trabajadores)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| MatrizError::cargo_not_found(id.to_string()))
    }

    pub async fn delete_cargo(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM cargos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MatrizError::cargo_not_found(id.to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // GES catalog
    // =========================================================================

    pub async fn list_ges(&self, categoria: Option<&str>, solo_activos: bool) -> Result<Vec<Ges>> {
        let ges = match categoria {
            Some(categoria) => {
                sqlx::query_as::<_, Ges>(
                    r#"
                    SELECT * FROM ges_catalogo
                    WHERE categoria = $1 AND (activo OR NOT $2)
                    ORDER BY categoria, nombre
                    "#,
                )
                .bind(categoria)
                .bind(solo_activos)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Ges>(
                    r#"
                    SELECT * FROM ges_catalogo
                    WHERE activo OR NOT $1
                    ORDER BY categoria, nombre
                    "#,
                )
                .bind(solo_activos)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(ges)
    }

    pub async fn get_ges(&self, id: Uuid) -> Result<Ges> {
        sqlx::query_as::<_, Ges>("SELECT * FROM ges_catalogo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| MatrizError::ges_not_found(id.to_string()))
    }

    pub async fn create_ges(
        &self,
        categoria: &str,
        nombre: &str,
        descripcion: Option<&str>,
    ) -> Result<Ges> {
        sqlx::query_as::<_, Ges>(
            r#"
            INSERT INTO ges_catalogo (categoria, nombre, descripcion)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(categoria)
        .bind(nombre)
        .bind(descripcion)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return MatrizError::already_exists("ges", nombre);
                }
            }
            MatrizError::from(e)
        })
    }

    pub async fn update_ges(
        &self,
        id: Uuid,
        categoria: &str,
        nombre: &str,
        descripcion: Option<&str>,
        activo: bool,
    ) -> Result<Ges> {
        sqlx::query_as::<_, Ges>(
            r#"
            UPDATE ges_catalogo
            SET categoria = $1, nombre = $2, descripcion = $3,
                activo = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(categoria)
        .bind(nombre)
        .bind(descripcion)
        .bind(activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| MatrizError::ges_not_found(id.to_string()))
    }

    /// Soft delete: catalog rows are deactivated, never removed.
    pub async fn deactivate_ges(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE ges_catalogo SET activo = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MatrizError::ges_not_found(id.to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Evaluaciones
    // =========================================================================

    /// Insert or overwrite the evaluation for a (cargo, GES) pair.
    ///
    /// The derived columns come from the caller, which recomputes them
    /// through matriz-gtc45 before every write. Overwrite-then-recompute
    /// is the only update semantics for evaluations.
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert_evaluacion(
        &self,
        cargo_id: Uuid,
        ges_id: Uuid,
        nd: i16,
        ne: i16,
        nc: i16,
        np: i32,
        nr: i32,
        interpretacion: &str,
        observaciones: Option<&str>,
    ) -> Result<Evaluacion> {
        self.get_cargo(cargo_id).await?;
        self.get_ges(ges_id).await?;

        let evaluacion = sqlx::query_as::<_, Evaluacion>(
            r#"
            INSERT INTO evaluaciones
                (cargo_id, ges_id, nd, ne, nc, np, nr, interpretacion, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (cargo_id, ges_id) DO UPDATE
            SET nd = EXCLUDED.nd, ne = EXCLUDED.ne, nc = EXCLUDED.nc,
                np = EXCLUDED.np, nr = EXCLUDED.nr,
                interpretacion = EXCLUDED.interpretacion,
                observaciones = EXCLUDED.observaciones,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(cargo_id)
        .bind(ges_id)
        .bind(nd)
        .bind(ne)
        .bind(nc)
        .bind(np)
        .bind(nr)
        .bind(interpretacion)
        .bind(observaciones)
        .fetch_one(&self.pool)
        .await?;

        Ok(evaluacion)
    }

    pub async fn list_evaluaciones(&self, cargo_id: Uuid) -> Result<Vec<Evaluacion>> {
        self.get_cargo(cargo_id).await?;

        let evaluaciones = sqlx::query_as::<_, Evaluacion>(
            "SELECT * FROM evaluaciones WHERE cargo_id = $1 ORDER BY created_at",
        )
        .bind(cargo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(evaluaciones)
    }

    pub async fn delete_evaluacion(&self, cargo_id: Uuid, ges_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM evaluaciones WHERE cargo_id = $1 AND ges_id = $2")
                .bind(cargo_id)
                .bind(ges_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(MatrizError::evaluacion_not_found(cargo_id.to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Matriz de riesgos
    // =========================================================================

    pub async fn matriz(&self, empresa_id: Uuid) -> Result<Vec<MatrizFila>> {
        self.get_empresa(empresa_id).await?;

        let filas = sqlx::query_as::<_, MatrizFila>(
            r#"
            SELECT e.nombre AS empresa, e.nit,
                   c.nombre AS cargo, c.zona,
                   g.categoria, g.nombre AS ges,
                   ev.nd, ev.ne, ev.nc, ev.np, ev.nr,
                   ev.interpretacion, ev.observaciones
            FROM evaluaciones ev
            JOIN cargos c ON c.id = ev.cargo_id
            JOIN empresas e ON e.id = c.empresa_id
            JOIN ges_catalogo g ON g.id = ev.ges_id
            WHERE e.id = $1
            ORDER BY c.nombre, g.categoria, g.nombre
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(filas)
    }
}
